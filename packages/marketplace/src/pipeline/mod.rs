//! Pipeline orchestration: fetch, extract, dedupe, aggregate.
//!
//! [`MarketplaceScraper`] is the crate's public surface. Its four
//! operations never raise past the boundary: every fetch, parse, or
//! extraction failure is logged and degrades to an empty or null result.
//! The scraper holds only immutable config and the HTTP client, so
//! concurrent invocations are independent.

mod events;
mod production;
mod search;
mod tickets;

use crate::client::MarketplaceClient;
use crate::config::MarketplaceConfig;
use crate::error::Result;

/// Scrapes live marketplace pages into normalized records.
///
/// # Example
///
/// ```rust,ignore
/// use marketplace::MarketplaceScraper;
///
/// let scraper = MarketplaceScraper::new()?;
/// let events = scraper.collect_events(12).await;
/// let tickets = scraper.resolve_tickets("512345", 2).await;
/// ```
#[derive(Debug, Clone)]
pub struct MarketplaceScraper {
    client: MarketplaceClient,
    config: MarketplaceConfig,
}

impl MarketplaceScraper {
    /// Create a scraper against the default marketplace origin.
    pub fn new() -> Result<Self> {
        Self::with_config(MarketplaceConfig::default())
    }

    /// Create a scraper with a custom config (origin, user agent, timeout).
    pub fn with_config(config: MarketplaceConfig) -> Result<Self> {
        let client = MarketplaceClient::new(&config)?;
        Ok(Self { client, config })
    }

    pub(crate) fn client(&self) -> &MarketplaceClient {
        &self.client
    }

    pub(crate) fn config(&self) -> &MarketplaceConfig {
        &self.config
    }
}
