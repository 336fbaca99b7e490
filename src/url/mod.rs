//! URL handling module for Sumi-Sweep
//!
//! This module provides URL normalization for the visited set and origin
//! derivation for the robots.txt cache and the same-origin link filter.

mod normalize;
mod origin;

// Re-export main functions
pub use normalize::{normalize, normalize_url};
pub use origin::{origin_key, robots_url, same_origin};
