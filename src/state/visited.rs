use std::collections::HashSet;
use url::Url;

/// A URL accepted into the frontier, with its distance from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRecord {
    /// Normalized URL
    pub url: String,

    /// Number of link hops from the seed (the seed itself is 0)
    pub depth: u32,
}

impl CrawlRecord {
    /// Creates a record for `url` at `depth`
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// Set of normalized URLs admitted during one crawl
///
/// The set only grows. Membership is the admission gate for the frontier:
/// a URL is inserted when it is first scheduled, before robots.txt is
/// consulted or the page is fetched.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates an empty visited set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the URL has already been admitted
    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url.as_str())
    }

    /// Admits a URL, returning false if it was already present
    pub fn insert(&mut self, url: &Url) -> bool {
        if self.urls.contains(url.as_str()) {
            return false;
        }
        self.urls.insert(url.as_str().to_string())
    }

    /// Number of admitted URLs
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if nothing has been admitted yet
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
