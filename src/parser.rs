//! Raw record parsing
//!
//! The CTD export is a headerless, comma-separated file with double-quote
//! quoting and `#`-prefixed comment lines. Every data row carries the same
//! eleven positional fields. Rows that do not are still usable: a short row
//! is padded with empty strings and a long row is truncated to the known
//! field list (trailing fields have no column to land in).
//!
//! Parsing is a single forward pass. [`RecordReader`] wraps a `csv` reader
//! configured for this shape and yields one [`RawRecord`] per data row; it
//! is consumed exactly once per run.

use crate::config::Config;
use crate::error::Error;
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::io::Read;

/// Number of positional fields in one interaction row.
pub const FIELD_COUNT: usize = 11;

/// One row of the source dataset, exactly as exported. Absent fields are
/// empty strings, never a sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub chemical_name: String,
    pub chemical_id: String,
    pub cas_rn: String,
    pub gene_symbol: String,
    pub gene_id: String,
    pub gene_forms: String,
    pub organism: String,
    pub organism_id: String,
    pub interaction: String,
    pub interaction_actions: String,
    pub pubmed_ids: String,
}

impl RawRecord {
    /// Build a record from a parsed row, padding missing trailing fields
    /// with empty strings and dropping any fields past [`FIELD_COUNT`].
    fn from_string_record(record: &StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        Self {
            chemical_name: field(0),
            chemical_id: field(1),
            cas_rn: field(2),
            gene_symbol: field(3),
            gene_id: field(4),
            gene_forms: field(5),
            organism: field(6),
            organism_id: field(7),
            interaction: field(8),
            interaction_actions: field(9),
            pubmed_ids: field(10),
        }
    }
}

/// Forward-only reader over the source file. Comment lines are skipped
/// before they reach the iterator; quoting irregularities fall back to the
/// csv crate's lenient field splitting rather than failing the run.
pub struct RecordReader<R: Read> {
    inner: StringRecordsIntoIter<R>,
}

impl RecordReader<File> {
    /// Open the configured input for a single linear scan.
    ///
    /// Fails with [`Error::SourceNotFound`] if the path cannot be opened;
    /// nothing has been written at that point.
    pub fn open(config: &Config) -> Result<Self, Error> {
        let file = File::open(&config.input).map_err(|source| Error::SourceNotFound {
            path: config.input.clone(),
            source,
        })?;
        Ok(Self::from_reader(file, config))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap an already-open source. Used directly by tests; `open` is the
    /// production path.
    pub fn from_reader(reader: R, config: &Config) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(config.delimiter)
            .comment(Some(config.comment_marker))
            .from_reader(reader)
            .into_records();

        Self { inner }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        Some(
            record
                .map(|r| RawRecord::from_string_record(&r))
                .map_err(Error::from),
        )
    }
}
