//! Filter vocabulary extraction
//!
//! The report's two dropdowns are populated from the distinct values seen
//! in the normalized records. Aggregation happens after the full record
//! sequence is materialized; the sets are deduplicated and sorted in byte
//! order. An empty string is a legal member — a record with a blank
//! chemical or species still gets a filter entry.

use crate::normalize::NormalizedRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Sorted, duplicate-free value sets for the two filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub chemicals: Vec<String>,
    pub species: Vec<String>,
}

impl Vocabulary {
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        let chemicals: BTreeSet<&str> = records.iter().map(|r| r.chemical.as_str()).collect();
        let species: BTreeSet<&str> = records.iter().map(|r| r.species.as_str()).collect();

        Self {
            chemicals: chemicals.into_iter().map(str::to_string).collect(),
            species: species.into_iter().map(str::to_string).collect(),
        }
    }
}
