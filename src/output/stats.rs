//! Crawl statistics
//!
//! This module provides the counters the crawl engine keeps while it runs
//! and a formatted printout for the command line.

use crate::state::VisitState;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Number of URLs recorded
    pub total_records: u64,

    /// Final state of each recorded URL
    pub by_state: BTreeMap<VisitState, u64>,

    /// Number of recorded URLs per depth
    pub by_depth: BTreeMap<u32, u64>,

    /// robots.txt requests issued
    pub robots_fetches: u64,

    /// Page requests issued
    pub page_fetches: u64,

    /// Same-origin links extracted across all pages
    pub links_found: u64,

    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When the crawl finished
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for CrawlStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlStatistics {
    /// Creates empty statistics stamped with the current time
    pub fn new() -> Self {
        Self {
            total_records: 0,
            by_state: BTreeMap::new(),
            by_depth: BTreeMap::new(),
            robots_fetches: 0,
            page_fetches: 0,
            links_found: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Counts a newly recorded URL at `depth`
    pub fn record_depth(&mut self, depth: u32) {
        self.total_records += 1;
        *self.by_depth.entry(depth).or_insert(0) += 1;
    }

    /// Counts the terminal state reached by a URL
    pub fn record_outcome(&mut self, state: VisitState) {
        *self.by_state.entry(state).or_insert(0) += 1;
    }

    /// Number of URLs that ended in `state`
    pub fn count(&self, state: VisitState) -> u64 {
        self.by_state.get(&state).copied().unwrap_or(0)
    }

    /// Deepest depth at which a URL was recorded
    pub fn max_depth_reached(&self) -> Option<u32> {
        self.by_depth.keys().next_back().copied()
    }

    /// Stamps the finish time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration in milliseconds, once finished
    pub fn duration_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds())
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  URLs recorded: {}", stats.total_records);
    println!("  Pages fetched: {}", stats.page_fetches);
    println!("  robots.txt fetches: {}", stats.robots_fetches);
    println!("  Links found: {}", stats.links_found);
    if let Some(ms) = stats.duration_ms() {
        println!("  Duration: {:.2}s", ms as f64 / 1000.0);
    }
    println!();

    println!("URLs by State:");
    for state in VisitState::terminal_states() {
        let count = stats.count(state);
        if count == 0 {
            continue;
        }
        let percentage = if stats.total_records > 0 {
            (count as f64 / stats.total_records as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", state, count, percentage);
    }
    println!();

    println!("URLs by Depth:");
    for (depth, count) in &stats.by_depth {
        println!("  {}: {}", depth, count);
    }
}
