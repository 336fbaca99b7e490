//! Robots.txt parser implementation
//!
//! This is a deliberately small, line-prefix parser. It understands the
//! wildcard user-agent group and its `Allow` / `Disallow` prefixes, nothing
//! else.

use url::Url;

/// Literal that opens the applicable group (case-sensitive)
const WILDCARD_AGENT: &str = "User-agent: *";

const DISALLOW: &str = "Disallow:";
const ALLOW: &str = "Allow:";

/// Parsed robots.txt rules for one origin
///
/// # Parsing Rules
///
/// - Each line is trimmed, then matched by prefix
/// - A line starting with `User-agent: *` makes every later `Allow:` and
///   `Disallow:` line applicable. Later `User-agent` lines do not close the
///   group.
/// - Rule values are the text after the first colon, trimmed. Empty values
///   are skipped.
/// - Anything else is ignored
///
/// # Decision
///
/// A path is allowed if it starts with any allow-prefix, denied if it starts
/// with any disallow-prefix, and allowed otherwise. Allow prefixes win
/// regardless of length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsPolicy {
    allow: Vec<String>,
    disallow: Vec<String>,
}

impl RobotsPolicy {
    /// Creates a new RobotsPolicy from raw robots.txt content
    ///
    /// # Arguments
    ///
    /// * `content` - The raw robots.txt file content
    ///
    /// # Returns
    ///
    /// A RobotsPolicy holding the rules of the wildcard group
    ///
    /// # Example
    ///
    /// ```
    /// use sumi_sweep::robots::RobotsPolicy;
    ///
    /// let robots = RobotsPolicy::from_content("User-agent: *\nAllow: /public\nDisallow: /");
    /// assert!(robots.is_allowed("/public/x"));
    /// assert!(!robots.is_allowed("/private"));
    /// ```
    pub fn from_content(content: &str) -> Self {
        let mut policy = Self::default();
        let mut applicable = false;

        for line in content.lines() {
            let line = line.trim();

            if line.starts_with(WILDCARD_AGENT) {
                applicable = true;
            } else if !applicable {
                continue;
            } else if let Some(value) = line.strip_prefix(DISALLOW) {
                push_rule(&mut policy.disallow, value);
            } else if let Some(value) = line.strip_prefix(ALLOW) {
                push_rule(&mut policy.allow, value);
            }
        }

        policy
    }

    /// Creates a permissive RobotsPolicy that allows everything
    ///
    /// This is used when robots.txt cannot be fetched.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Returns true if no rule can deny a path
    pub fn is_permissive(&self) -> bool {
        self.disallow.is_empty()
    }

    /// Allow prefixes, in file order
    pub fn allow_prefixes(&self) -> &[String] {
        &self.allow
    }

    /// Disallow prefixes, in file order
    pub fn disallow_prefixes(&self) -> &[String] {
        &self.disallow
    }

    /// Checks if a URL path is allowed
    ///
    /// # Arguments
    ///
    /// * `path` - The URL path to check (e.g., "/page.html")
    ///
    /// # Returns
    ///
    /// * `true` - If the path is allowed
    /// * `false` - If the path is disallowed
    pub fn is_allowed(&self, path: &str) -> bool {
        if self.allow.iter().any(|prefix| path.starts_with(prefix.as_str())) {
            return true;
        }

        !self
            .disallow
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Checks if a URL is allowed, using its path (query excluded)
    pub fn allows_url(&self, url: &Url) -> bool {
        self.is_allowed(url.path())
    }
}

fn push_rule(rules: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        rules.push(value.to_string());
    }
}
