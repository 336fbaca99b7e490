//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - HTML parsing and same-origin link extraction
//! - The depth-bounded crawl engine

mod engine;
mod fetcher;
mod parser;

pub use engine::{CrawlReport, Crawler};
pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use parser::extract_links;

use crate::config::{validate, Config};
use crate::output::export_records;
use crate::SweepError;
use std::time::Duration;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration before any request is made
/// 2. Build the HTTP client from the user agent settings
/// 3. Crawl from the configured seed up to the configured depth
/// 4. Return the discovered records and statistics
///
/// Exporting the records is left to the caller; see [`crawl_and_export`].
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(SweepError)` - The configuration is invalid or the client could not
///   be built
pub async fn crawl(config: &Config) -> Result<CrawlReport, SweepError> {
    validate(config)?;

    let fetcher = HttpFetcher::from_config(
        &config.user_agent,
        Duration::from_secs(config.crawler.request_timeout),
    )?;

    Crawler::new(fetcher, config.crawler.max_depth)
        .crawl(&config.crawler.seed_url)
        .await
}

/// Crawls and writes the records to the configured CSV file
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The crawl completed and the CSV file was written
/// * `Err(SweepError)` - As for [`crawl`], or `SweepError::Output` when the
///   CSV file could not be written
pub async fn crawl_and_export(config: &Config) -> Result<CrawlReport, SweepError> {
    let report = crawl(config).await?;
    export_records(&config.output, &report.records)?;
    Ok(report)
}
