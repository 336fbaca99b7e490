//! Robots.txt handling module
//!
//! This module provides functionality for fetching, parsing, and caching robots.txt files.
//! It respects robots.txt directives when crawling websites.

mod cache;
mod parser;

pub use cache::RobotsCache;
pub use parser::RobotsPolicy;

use crate::crawler::Fetcher;
use crate::url::{origin_key, robots_url};
use url::Url;

/// Fetches and parses robots.txt for the origin of `url`
///
/// # Arguments
///
/// * `fetcher` - The fetcher used for the GET request
/// * `url` - Any URL on the origin
///
/// # Returns
///
/// The parsed policy, or a permissive policy if the request fails or returns
/// a non-success status
pub async fn fetch_robots<F>(fetcher: &F, url: &Url) -> RobotsPolicy
where
    F: Fetcher + ?Sized,
{
    let Some(location) = robots_url(url) else {
        return RobotsPolicy::allow_all();
    };

    match fetcher.get(&location).await {
        Ok(page) => RobotsPolicy::from_content(&page.body),
        Err(e) => {
            tracing::warn!(
                "robots.txt unavailable for {} ({}); allowing all paths",
                origin_key(url),
                e
            );
            RobotsPolicy::allow_all()
        }
    }
}
