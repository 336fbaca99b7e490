//! HTML parser for extracting same-origin links
//!
//! This module turns page markup into the list of URLs the crawl engine may
//! follow next.

use crate::url::{normalize, same_origin};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts followable same-origin links from an HTML page
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` tags, in document order
///
/// **Exclude:**
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Fragment-only links (same page anchors)
/// - Links whose origin differs from `base_url`
///
/// Relative references are resolved against `base_url`. Resolved URLs are
/// normalized (fragment dropped) and each URL is returned once, at its first
/// position.
///
/// # Arguments
///
/// * `base_url` - The page URL, used to resolve relative links and as the
///   origin filter
/// * `html` - The HTML content
///
/// # Example
///
/// ```
/// use sumi_sweep::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<a href="/page">Link</a><a href="https://other.com/">Away</a>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(&base_url, html);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://example.com/page");
/// ```
pub fn extract_links(base_url: &Url, html: &str) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&a_selector) {
        // Skip if it has the download attribute
        if element.value().attr("download").is_some() {
            continue;
        }

        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(absolute_url) = resolve_link(href, base_url) else {
            continue;
        };

        if !same_origin(&absolute_url, base_url) {
            tracing::trace!("Skipping cross-origin link {}", absolute_url);
            continue;
        }

        if seen.insert(absolute_url.as_str().to_string()) {
            links.push(absolute_url);
        }
    }

    links
}

/// Resolves a link href to an absolute, normalized URL
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only or empty hrefs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    let absolute_url = base_url.join(href).ok()?;
    normalize(absolute_url).ok()
}
