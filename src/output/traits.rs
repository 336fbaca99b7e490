//! Output sink traits and types
//!
//! This module defines the trait interface for record sinks and the column
//! layouts an export can use.

use crate::state::CrawlRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Column layout of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportShape {
    /// `URL,Depth`
    #[default]
    UrlAndDepth,

    /// `URL` only
    UrlOnly,
}

impl ExportShape {
    /// Header row for this shape
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Self::UrlAndDepth => &["URL", "Depth"],
            Self::UrlOnly => &["URL"],
        }
    }
}

/// Trait for record sinks
///
/// A sink receives the full record list once, at the end of a crawl.
pub trait RecordSink {
    /// Persists `records` in order
    ///
    /// # Arguments
    ///
    /// * `records` - The records to write, in discovery order
    fn write_records(&mut self, records: &[CrawlRecord]) -> OutputResult<()>;
}
