//! Crawl engine - depth-bounded traversal
//!
//! This module contains the traversal that drives one crawl:
//! - Admitting URLs through the visited set
//! - Consulting the robots.txt cache
//! - Fetching pages and extracting same-origin links
//! - Recursing depth-first up to the configured depth

use crate::crawler::parser::extract_links;
use crate::crawler::Fetcher;
use crate::output::CrawlStatistics;
use crate::robots::RobotsCache;
use crate::state::{CrawlRecord, VisitState, VisitedSet};
use crate::url::normalize_url;
use crate::SweepError;
use std::future::Future;
use std::pin::Pin;
use url::Url;

/// Result of one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Normalized seed URL
    pub seed: Url,

    /// Accepted URLs in discovery (depth-first) order
    pub records: Vec<CrawlRecord>,

    /// Counters collected during the crawl
    pub stats: CrawlStatistics,
}

impl CrawlReport {
    /// Discovered URLs in discovery order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.url.as_str())
    }
}

/// Depth-bounded, same-origin crawler
///
/// A `Crawler` holds only its collaborators and settings. Each call to
/// [`Crawler::crawl`] starts from an empty visited set and an empty robots.txt
/// cache, so invocations never share state.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use sumi_sweep::config::UserAgentConfig;
/// use sumi_sweep::crawler::{Crawler, HttpFetcher};
///
/// # async fn example() -> sumi_sweep::Result<()> {
/// let fetcher = HttpFetcher::from_config(&UserAgentConfig::default(), Duration::from_secs(30))?;
/// let crawler = Crawler::new(fetcher, 2);
/// let report = crawler.crawl("https://example.com/").await?;
/// for record in &report.records {
///     println!("{} {}", record.depth, record.url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Crawler<F> {
    fetcher: F,
    max_depth: u32,
}

impl<F: Fetcher> Crawler<F> {
    /// Creates a crawler that follows links at most `max_depth` hops from the seed
    pub fn new(fetcher: F, max_depth: u32) -> Self {
        Self { fetcher, max_depth }
    }

    /// The fetcher used for pages and robots.txt
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Crawls from `seed`
    ///
    /// # Arguments
    ///
    /// * `seed` - Absolute http(s) URL to start from
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The crawl ran to completion. Fetch failures and
    ///   robots.txt denials are recovered and reflected in the statistics.
    /// * `Err(SweepError)` - The seed is not a crawlable URL; nothing was fetched
    pub async fn crawl(&self, seed: &str) -> Result<CrawlReport, SweepError> {
        let seed = normalize_url(seed)?;

        tracing::info!(
            "Starting crawl from {} (max depth {})",
            seed,
            self.max_depth
        );

        let mut session = CrawlSession::new(&self.fetcher, self.max_depth);
        session.visit(seed.clone(), 0).await;

        let report = session.finish(seed);
        tracing::info!(
            "Crawl finished: {} URLs recorded, {} pages fetched",
            report.records.len(),
            report.stats.page_fetches
        );

        Ok(report)
    }
}

/// State owned by a single crawl invocation
struct CrawlSession<'f, F: ?Sized> {
    fetcher: &'f F,
    max_depth: u32,
    visited: VisitedSet,
    robots: RobotsCache,
    records: Vec<CrawlRecord>,
    stats: CrawlStatistics,
}

impl<'f, F: Fetcher + ?Sized> CrawlSession<'f, F> {
    fn new(fetcher: &'f F, max_depth: u32) -> Self {
        Self {
            fetcher,
            max_depth,
            visited: VisitedSet::new(),
            robots: RobotsCache::new(),
            records: Vec::new(),
            stats: CrawlStatistics::new(),
        }
    }

    /// Visits `url` at `depth`, then its same-origin links at `depth + 1`
    ///
    /// Order matters: the URL is admitted to the visited set and recorded
    /// before robots.txt is consulted, so a denied or failed URL is never
    /// reconsidered.
    ///
    /// A URL at exactly `max_depth` is recorded and policy-checked but its
    /// page is never requested, since none of its links could be admitted.
    /// The records match a crawler that fetches and discards such pages, but
    /// the request count is lower: one GET fewer per depth-terminal URL.
    fn visit<'a>(
        &'a mut self,
        url: Url,
        depth: u32,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            if depth > self.max_depth || !self.visited.insert(&url) {
                return;
            }

            tracing::info!("Visiting {} (depth {})", url, depth);
            self.records.push(CrawlRecord::new(url.as_str(), depth));
            self.stats.record_depth(depth);
            let state = VisitState::Enqueued;

            let allowed = self
                .robots
                .policy_for(self.fetcher, &url)
                .await
                .allows_url(&url);
            if !allowed {
                tracing::info!("URL {} disallowed by robots.txt", url);
                self.stats
                    .record_outcome(state.advance(VisitState::PolicyDenied));
                return;
            }
            let state = state.advance(VisitState::PolicyChecked);

            if depth == self.max_depth {
                tracing::debug!("{} is at max depth {}; not expanding", url, depth);
                self.stats
                    .record_outcome(state.advance(VisitState::TerminalDepth));
                return;
            }

            self.stats.page_fetches += 1;
            let page = match self.fetcher.get(&url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", url, e);
                    self.stats
                        .record_outcome(state.advance(VisitState::FetchFailed));
                    return;
                }
            };

            if page.final_url != url {
                tracing::debug!("{} redirected to {}", url, page.final_url);
            }

            let links = extract_links(&page.final_url, &page.body);
            tracing::debug!("Found {} same-origin links on {}", links.len(), url);
            self.stats.links_found += links.len() as u64;
            self.stats
                .record_outcome(state.advance(VisitState::Expanded));

            for link in links {
                if !self.visited.contains(&link) {
                    self.visit(link, depth + 1).await;
                }
            }
        })
    }

    fn finish(mut self, seed: Url) -> CrawlReport {
        self.stats.robots_fetches = self.robots.fetch_count() as u64;
        self.stats.finish();

        CrawlReport {
            seed,
            records: self.records,
            stats: self.stats,
        }
    }
}
