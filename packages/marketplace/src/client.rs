//! HTTP client for the marketplace origin.
//!
//! One `reqwest::Client` per scraper, fixed timeout and desktop-browser
//! user agent. No retries: a single failed attempt is final for that
//! invocation.

use serde_json::Value;
use tracing::debug;

use crate::config::MarketplaceConfig;
use crate::error::{Result, ScrapeError};

/// Thin wrapper over `reqwest::Client` carrying the marketplace origin.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    client: reqwest::Client,
    base_url: String,
}

impl MarketplaceClient {
    pub fn new(config: &MarketplaceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ScrapeError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// The configured origin, no trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path under the marketplace origin.
    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// Fetch a page as HTML text. Non-2xx statuses are failures.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        debug!(url = %url, "fetching page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::from_reqwest(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP {} for {}", status, url),
            ))));
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::from_reqwest(e, url))
    }

    /// Fetch a JSON endpoint. Sends the browser-shaped header set the
    /// marketplace API expects alongside the user agent.
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        debug!(url = %url, "fetching JSON");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json, text/plain, */*")
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::REFERER, format!("{}/", self.base_url))
            .header(reqwest::header::ORIGIN, self.base_url.clone())
            .send()
            .await
            .map_err(|e| ScrapeError::from_reqwest(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP {} for {}", status, url),
            ))));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::from_reqwest(e, url))?;
        Ok(serde_json::from_str(&body)?)
    }
}
