//! SUS-PECIES - Browse chemical-gene susceptibility interactions
//!
//! Turns the flat CTD chemical-gene interaction export into one static,
//! self-contained HTML page a researcher can open and explore without a
//! database or a server. All interactivity (filtering by chemical or
//! species, sorting, pagination) is client-side and baked into the
//! generated document.
//!
//! # Pipeline
//!
//! One run is a single forward pass over the input:
//!
//! 1. **Parse** - read the headerless, comma-separated export into raw
//!    records, skipping comment lines and tolerating ragged rows.
//! 2. **Normalize** - derive the display fields: rename columns, split the
//!    pipe-delimited action and PubMed cells, classify each action token
//!    into an increase/decrease/other badge.
//! 3. **Extract vocabularies** - collect the distinct, sorted chemical and
//!    species values that populate the two filter dropdowns.
//! 4. **Render** - substitute rows and vocabularies into the fixed report
//!    template and write the document in one shot.
//!
//! # Quick Start
//!
//! ```no_run
//! use suspecies::{run, Config};
//!
//! let config = Config::new()
//!     .with_input("ctd_data/CTD_chem_gene_ixns.csv")
//!     .with_output("network_outputs/index.html");
//!
//! let summary = run(&config)?;
//! println!("{} interactions rendered", summary.records);
//! # Ok::<(), suspecies::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`parser`]: raw record reading (comment lines, quoting, ragged rows)
//! - [`normalize`]: display-field derivation and badge classification
//! - [`vocab`]: filter vocabulary extraction
//! - [`report`]: HTML and JSON output formatters

pub mod config;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod vocab;

pub use config::Config;
pub use error::Error;
pub use normalize::{Badge, BadgeCategory, NormalizedRecord};
pub use parser::{RawRecord, RecordReader};
pub use report::Summary;
pub use vocab::Vocabulary;

/// Run the whole pipeline for one configuration: parse, normalize,
/// aggregate, render, write.
///
/// The document is built fully in memory before the output path is
/// touched, so a failed run never modifies an existing report. Returns the
/// headline counts for console output.
pub fn run(config: &Config) -> Result<Summary, Error> {
    let reader = RecordReader::open(config)?;
    let records: Vec<NormalizedRecord> = reader
        .map(|raw| raw.map(NormalizedRecord::from_raw))
        .collect::<Result<_, _>>()?;

    let vocab = Vocabulary::from_records(&records);
    report::generate(&config.output, &records, &vocab)?;

    Ok(Summary::new(&records, &vocab))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================
    //
    // These tests verify the public API surface is correct and documented.
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        let _: BadgeCategory = BadgeCategory::Other;
        let _config = Config::new();
        let _vocab = Vocabulary::default();
    }

    #[test]
    fn test_badge_category_variants() {
        let _ = BadgeCategory::Increase;
        let _ = BadgeCategory::Decrease;
        let _ = BadgeCategory::Other;
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = std::env::temp_dir().join("suspecies-e2e");
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("input.csv");
        std::fs::write(
            &input,
            "#header\nCaffeine,D002110,58-08-2,CYP1A2,1544,protein,Homo sapiens,9606,\
             increased activity,increases^activity|increases^activity^of,12345|67890\n",
        )
        .unwrap();

        let config = Config::new()
            .with_input(&input)
            .with_output(dir.join("out").join("index.html"));
        let summary = run(&config).unwrap();

        assert_eq!(summary.records, 1);
        assert_eq!(summary.chemicals, 1);
        assert_eq!(summary.species, 1);

        let html = std::fs::read_to_string(&config.output).unwrap();
        assert!(html.contains("<td>Caffeine</td>"));
        assert!(html.contains("<option value=\"Homo sapiens\">Homo sapiens</option>"));
        assert!(html.contains("12345"));
    }

    #[test]
    fn test_run_fails_before_output_when_input_missing() {
        let config = Config::new()
            .with_input("definitely/not/here.csv")
            .with_output("target/test-run-missing/index.html");

        match run(&config) {
            Err(Error::SourceNotFound { .. }) => {}
            other => panic!("expected SourceNotFound, got {:?}", other.is_ok()),
        }
        assert!(!config.output.exists());
        assert!(!config.output.parent().unwrap().exists());
    }
}
