//! Output module for exporting crawl results
//!
//! This module handles:
//! - Writing discovered URLs (and optionally their depth) to CSV
//! - Recording and printing crawl statistics

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::{write_csv, CsvExporter};
pub use stats::{print_statistics, CrawlStatistics};
pub use traits::{ExportShape, OutputError, OutputResult, RecordSink};

use crate::config::OutputConfig;
use crate::state::CrawlRecord;

/// Exports records as configured in the `[output]` section
///
/// # Arguments
///
/// * `config` - Output path and depth column setting
/// * `records` - The records to write, in discovery order
///
/// # Returns
///
/// * `Ok(())` - The CSV file was written
/// * `Err(OutputError)` - The file could not be created or written
pub fn export_records(config: &OutputConfig, records: &[CrawlRecord]) -> OutputResult<()> {
    let mut exporter = CsvExporter::new(&config.csv_path, config.export_shape());
    exporter.write_records(records)
}
