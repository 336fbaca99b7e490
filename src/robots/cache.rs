//! Robots.txt caching implementation
//!
//! Policies are cached per origin for the lifetime of one crawl and are never
//! refreshed. Failed fetches are cached as permissive policies too, so an
//! origin without a reachable robots.txt costs exactly one request.

use crate::crawler::Fetcher;
use crate::robots::{fetch_robots, RobotsPolicy};
use crate::url::origin_key;
use std::collections::hash_map::{Entry, HashMap};
use url::Url;

/// Per-origin robots.txt cache
#[derive(Debug, Default)]
pub struct RobotsCache {
    entries: HashMap<String, RobotsPolicy>,
    fetches: usize,
}

impl RobotsCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the policy for the origin of `url`, fetching it on first use
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Used to GET `{origin}/robots.txt` on a cache miss
    /// * `url` - Any URL on the origin
    ///
    /// # Returns
    ///
    /// The cached policy. Never fails: an unreachable robots.txt yields a
    /// permissive policy.
    pub async fn policy_for<F>(&mut self, fetcher: &F, url: &Url) -> &RobotsPolicy
    where
        F: Fetcher + ?Sized,
    {
        match self.entries.entry(origin_key(url)) {
            Entry::Occupied(entry) => {
                tracing::trace!("robots.txt cache hit for {}", entry.key());
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let policy = fetch_robots(fetcher, url).await;
                self.fetches += 1;
                tracing::debug!(
                    "Cached robots.txt for {} ({} allow, {} disallow rules)",
                    entry.key(),
                    policy.allow_prefixes().len(),
                    policy.disallow_prefixes().len()
                );
                entry.insert(policy)
            }
        }
    }

    /// Returns the cached policy for an origin key, if any
    pub fn get(&self, origin: &str) -> Option<&RobotsPolicy> {
        self.entries.get(origin)
    }

    /// Number of robots.txt requests issued through this cache
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    /// Number of cached origins
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no origin has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
