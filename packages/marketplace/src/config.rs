//! Configuration for the marketplace scraper.

use std::time::Duration;

/// Desktop-browser user agent sent with every request. The marketplace
/// serves a stripped page to unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";

/// Default marketplace origin.
pub const DEFAULT_BASE_URL: &str = "https://www.vividseats.com";

/// Configuration for a [`MarketplaceScraper`](crate::MarketplaceScraper).
///
/// The base URL is injectable so tests can point the scraper at a local
/// mock origin.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    /// Marketplace origin, no trailing slash (e.g. `https://www.vividseats.com`)
    pub base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Minimum structured-data records before the home-feed DOM fallback
    /// is skipped
    pub event_threshold: usize,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(15),
            event_threshold: 3,
        }
    }
}

impl MarketplaceConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the scraper at a different origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
