//! Typed errors for the scraping pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure class. None of these cross the public boundary: every
//! pipeline operation absorbs them and degrades to an empty/null result.

use thiserror::Error;

/// Errors that can occur while fetching or decoding marketplace pages.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP transport failure or non-2xx status
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request exceeded the fixed timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// JSON decoding error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Classify a reqwest failure, keeping timeouts distinguishable.
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            ScrapeError::Timeout {
                url: url.to_string(),
            }
        } else {
            ScrapeError::Http(Box::new(err))
        }
    }
}

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
