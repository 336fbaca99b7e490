use url::Url;

/// Returns the origin of a URL as a cache key
///
/// The key is the ASCII serialization of the URL's origin: scheme, host and
/// (non-default) port. Two URLs share a robots.txt policy exactly when their
/// keys are equal.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_sweep::url::origin_key;
///
/// let url = Url::parse("https://example.com/path?q=1").unwrap();
/// assert_eq!(origin_key(&url), "https://example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(origin_key(&url), "http://127.0.0.1:8080");
/// ```
pub fn origin_key(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Checks whether two URLs share scheme, host and port
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}

/// Builds the robots.txt location for the origin of `url`
pub fn robots_url(url: &Url) -> Option<Url> {
    url.join("/robots.txt").ok()
}
