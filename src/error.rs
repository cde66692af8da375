//! Error types for the report pipeline

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured input path does not exist or cannot be opened. Fatal
    /// before any output is produced.
    #[error("input file not found: {path}: {source}", path = path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reader failed mid-scan (I/O error, invalid UTF-8). Field-count
    /// mismatches are not errors; they are padded or truncated in place.
    #[error("failed to read records: {0}")]
    Read(#[from] csv::Error),

    /// The output directory could not be created or the document could not
    /// be written.
    #[error("failed to write report to {path}: {source}", path = path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
