//! Home-feed event collection.

use scraper::Html;
use tracing::{debug, warn};
use url::Url;

use super::MarketplaceScraper;
use crate::dedupe::dedupe_by;
use crate::error::{Result, ScrapeError};
use crate::extract::{dom, structured};
use crate::types::EventRecord;

impl MarketplaceScraper {
    /// Collect up to `limit` events from the marketplace home feed.
    ///
    /// Structured data first; when it yields fewer than the configured
    /// threshold, visible cards are appended before deduplication. Any
    /// failure returns an empty sequence, never an error.
    pub async fn collect_events(&self, limit: usize) -> Vec<EventRecord> {
        match self.try_collect_events(limit).await {
            Ok(events) => events,
            Err(e) => {
                warn!(error = %e, "home feed scrape failed");
                Vec::new()
            }
        }
    }

    async fn try_collect_events(&self, limit: usize) -> Result<Vec<EventRecord>> {
        let url = self.client().base_url().to_string();
        let html = self.client().fetch_html(&url).await?;

        let doc = Html::parse_document(&html);
        let mut events = structured::event_records(&doc);
        debug!(count = events.len(), "structured-data pass");

        if events.len() < self.config().event_threshold {
            let base = Url::parse(self.client().base_url())
                .map_err(|_| ScrapeError::InvalidUrl { url: url.clone() })?;
            let fallback = dom::event_cards(&doc, &base);
            debug!(count = fallback.len(), "DOM fallback pass");
            events.extend(fallback);
        }

        let mut events = dedupe_by(events, |e| e.production_id.clone());
        events.truncate(limit);
        Ok(events)
    }
}
