//! State module for tracking crawl progress
//!
//! This module provides the per-crawl state the engine owns.
//!
//! # Components
//!
//! - `VisitState`: the state machine each URL moves through
//! - `VisitedSet`: the admission gate for the frontier
//! - `CrawlRecord`: a discovered URL and its depth

mod visit_state;
mod visited;

// Re-export main types
pub use visit_state::VisitState;
pub use visited::{CrawlRecord, VisitedSet};
