use crate::UrlError;
use url::Url;

/// Normalizes a URL string into the identity used by the visited set
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed. Parsing already lowercases the
///    scheme and host, drops default ports and resolves dot segments.
/// 2. Accept only `http` and `https` schemes
/// 3. Require a host
/// 4. Remove fragment (everything after #)
///
/// The host is not otherwise rewritten, so the origin of the normalized URL
/// is the origin of the input.
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(Url)` - Normalized URL
/// * `Err(UrlError)` - Failed to parse or normalize the URL
///
/// # Examples
///
/// ```
/// use sumi_sweep::url::normalize_url;
///
/// let url = normalize_url("https://EXAMPLE.COM:443/a/../page#top").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;
    normalize(url)
}

/// Normalizes an already parsed URL (e.g. the result of `Url::join`)
pub fn normalize(mut url: Url) -> Result<Url, UrlError> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);

    Ok(url)
}
