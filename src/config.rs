//! Pipeline configuration
//!
//! Paths and parsing characters live in an explicit [`Config`] passed into
//! the pipeline entry point rather than module-level constants, so a caller
//! can point a run at any input/output pair without touching globals.

use std::path::PathBuf;

/// Default location of the CTD chemical-gene interaction export.
pub const DEFAULT_INPUT: &str = "ctd_data/CTD_chem_gene_ixns.csv";

/// Default location of the rendered report.
pub const DEFAULT_OUTPUT: &str = "network_outputs/index.html";

/// Everything a pipeline run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the delimited source file.
    pub input: PathBuf,
    /// Path the rendered document is written to. Parent directories are
    /// created as needed; an existing file is overwritten.
    pub output: PathBuf,
    /// Lines starting with this byte are skipped entirely.
    pub comment_marker: u8,
    /// Field separator within a record.
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            comment_marker: b'#',
            delimiter: b',',
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_comment_marker(mut self, marker: u8) -> Self {
        self.comment_marker = marker;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
