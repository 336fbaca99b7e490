use crate::output::ExportShape;
use serde::Deserialize;

/// Default output file, one row per discovered URL
pub const DEFAULT_CSV_PATH: &str = "scraped_urls_with_depth.csv";

/// Main configuration structure for Sumi-Sweep
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// URL the crawl starts from (depth 0)
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Maximum number of link hops from the seed (0 = seed only)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed_url: String::new(),
            max_depth: 2,
            request_timeout: 30,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "SumiSweep".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `CrawlerName/Version` or `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV file written at the end of the crawl
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// Whether the CSV carries a Depth column
    #[serde(rename = "record-depth")]
    pub record_depth: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
            record_depth: true,
        }
    }
}

impl OutputConfig {
    /// Column layout selected by `record-depth`
    pub fn export_shape(&self) -> ExportShape {
        if self.record_depth {
            ExportShape::UrlAndDepth
        } else {
            ExportShape::UrlOnly
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed_url: Option<String>,
    pub max_depth: Option<u32>,
    pub csv_path: Option<String>,
    pub request_timeout: Option<u64>,
    pub no_depth: bool,
}

impl ConfigOverrides {
    /// Applies every set override to `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = &self.seed_url {
            config.crawler.seed_url = seed.clone();
        }
        if let Some(depth) = self.max_depth {
            config.crawler.max_depth = depth;
        }
        if let Some(timeout) = self.request_timeout {
            config.crawler.request_timeout = timeout;
        }
        if let Some(path) = &self.csv_path {
            config.output.csv_path = path.clone();
        }
        if self.no_depth {
            config.output.record_depth = false;
        }
    }
}
