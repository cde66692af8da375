//! Field normalization
//!
//! Maps one [`RawRecord`] to one [`NormalizedRecord`], the shape the report
//! actually displays:
//!
//! - `Chemical` and `Species` are pure renames of `ChemicalName` and
//!   `Organism`.
//! - `InteractionActions` holds pipe-delimited tokens like
//!   `increases^activity`; each non-empty token becomes a [`Badge`] whose
//!   category depends only on the token's leading text and whose label is
//!   the token with every caret replaced by a space.
//! - `PubMedIDs` is pipe-delimited as well; empty segments are dropped,
//!   order and duplicates are kept.
//!
//! The mapping is total: an all-empty row normalizes to empty strings and
//! empty lists, never an error.

use crate::parser::RawRecord;
use serde::Serialize;

/// Visual class of one interaction-action token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Increase,
    Decrease,
    Other,
}

impl BadgeCategory {
    /// Classify a token by its leading text, case-insensitively. The token
    /// is trimmed first so stray whitespace around a segment does not
    /// defeat the prefix match.
    pub fn classify(token: &str) -> Self {
        let lowered = token.trim().to_lowercase();
        if lowered.starts_with("increases") {
            Self::Increase
        } else if lowered.starts_with("decreases") {
            Self::Decrease
        } else {
            Self::Other
        }
    }
}

/// One categorized label derived from an interaction-action token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub category: BadgeCategory,
}

/// A display-ready interaction record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    pub chemical: String,
    pub species: String,
    pub gene_symbol: String,
    pub interaction: String,
    pub badges: Vec<Badge>,
    pub pubmed_ids: Vec<String>,
}

impl NormalizedRecord {
    pub fn from_raw(raw: RawRecord) -> Self {
        Self {
            chemical: raw.chemical_name,
            species: raw.organism,
            gene_symbol: raw.gene_symbol,
            interaction: raw.interaction,
            badges: parse_actions(&raw.interaction_actions),
            pubmed_ids: split_list(&raw.pubmed_ids),
        }
    }
}

impl From<RawRecord> for NormalizedRecord {
    fn from(raw: RawRecord) -> Self {
        Self::from_raw(raw)
    }
}

/// Split a pipe-delimited action cell into badges, dropping empty segments.
pub fn parse_actions(cell: &str) -> Vec<Badge> {
    cell.split('|')
        .filter(|token| !token.is_empty())
        .map(|token| Badge {
            category: BadgeCategory::classify(token),
            label: token.replace('^', " "),
        })
        .collect()
}

/// Split a pipe-delimited cell into its non-empty segments, preserving
/// order and duplicates.
pub fn split_list(cell: &str) -> Vec<String> {
    cell.split('|')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
