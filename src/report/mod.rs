//! Report generation
//!
//! Output formatters for the normalized interaction records:
//!
//! - **HTML**: the browsable document — filterable, sortable, paginated
//!   table, styled action badges, PubMed links
//! - **JSON**: machine-readable dump of the same records and vocabularies
//!
//! The format is picked from the output extension, `.json` for JSON and
//! anything else for HTML. The document is always built fully in memory
//! first; the output file (and its parent directories) is only touched
//! once the build has succeeded, so a failed run never leaves a partial
//! report behind.

pub mod html;
pub mod json;

use crate::error::Error;
use crate::normalize::NormalizedRecord;
use crate::vocab::Vocabulary;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Render the records into the file at `path`, overwriting any previous
/// content and creating intermediate directories as needed.
pub fn generate<P: AsRef<Path>>(
    path: P,
    records: &[NormalizedRecord],
    vocab: &Vocabulary,
) -> Result<(), Error> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut buffer = Vec::new();
    let built = match ext.as_str() {
        "json" => json::write(&mut buffer, records, vocab),
        _ => html::write(&mut buffer, records, vocab),
    };
    built.map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, &buffer).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Headline numbers for a finished run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Table rows in the document.
    pub records: usize,
    /// Distinct chemical filter entries.
    pub chemicals: usize,
    /// Distinct species filter entries.
    pub species: usize,
}

impl Summary {
    pub fn new(records: &[NormalizedRecord], vocab: &Vocabulary) -> Self {
        Self {
            records: records.len(),
            chemicals: vocab.chemicals.len(),
            species: vocab.species.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(chemical: &str, species: &str) -> NormalizedRecord {
        NormalizedRecord {
            chemical: chemical.to_string(),
            species: species.to_string(),
            ..NormalizedRecord::default()
        }
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::new(&[], &Vocabulary::default());
        assert_eq!(summary.records, 0);
        assert_eq!(summary.chemicals, 0);
        assert_eq!(summary.species, 0);
    }

    #[test]
    fn test_summary_counts_rows_and_vocabulary() {
        let records = vec![
            record("Caffeine", "Homo sapiens"),
            record("Caffeine", "Mus musculus"),
            record("Arsenic", "Homo sapiens"),
        ];
        let vocab = Vocabulary::from_records(&records);
        let summary = Summary::new(&records, &vocab);

        assert_eq!(summary.records, 3);
        assert_eq!(summary.chemicals, 2);
        assert_eq!(summary.species, 2);
    }
}
