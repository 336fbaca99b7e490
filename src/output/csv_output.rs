//! CSV export of crawl records

use crate::output::traits::{ExportShape, OutputResult, RecordSink};
use crate::state::CrawlRecord;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes crawl records to a CSV file
///
/// The file is created (or truncated) on each write. The first row is the
/// header for the configured [`ExportShape`]; each record becomes one row.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
    shape: ExportShape,
}

impl CsvExporter {
    /// Creates an exporter for `path` using `shape`
    pub fn new(path: impl AsRef<Path>, shape: ExportShape) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            shape,
        }
    }
}

impl RecordSink for CsvExporter {
    fn write_records(&mut self, records: &[CrawlRecord]) -> OutputResult<()> {
        let writer = csv::Writer::from_path(&self.path)?;
        write_csv(writer, records, self.shape)?;

        tracing::info!(
            "{} URLs saved to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Writes `records` with a header row to any CSV writer
pub fn write_csv<W: Write>(
    mut writer: csv::Writer<W>,
    records: &[CrawlRecord],
    shape: ExportShape,
) -> OutputResult<()> {
    writer.write_record(shape.header())?;

    for record in records {
        match shape {
            ExportShape::UrlAndDepth => {
                writer.write_record([record.url.clone(), record.depth.to_string()])?
            }
            ExportShape::UrlOnly => writer.write_record([record.url.as_str()])?,
        }
    }

    writer.flush()?;
    Ok(())
}
