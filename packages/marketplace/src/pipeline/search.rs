//! Query-parameterized search collection.

use scraper::Html;
use tracing::{debug, warn};
use url::Url;

use super::MarketplaceScraper;
use crate::dedupe::dedupe_by;
use crate::error::{Result, ScrapeError};
use crate::extract::{dom, structured};
use crate::types::EventRecord;

impl MarketplaceScraper {
    /// Collect up to `limit` events matching `query`.
    ///
    /// An empty or whitespace-only query returns an empty sequence
    /// without touching the network. Search pages embed at most one
    /// canonical event as structured data, so the structured pass takes
    /// only the first qualifying block; production anchors in the markup
    /// fill in when it yields nothing.
    pub async fn collect_search(&self, query: &str, limit: usize) -> Vec<EventRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.try_collect_search(query, limit).await {
            Ok(events) => events,
            Err(e) => {
                warn!(query = %query, error = %e, "search scrape failed");
                Vec::new()
            }
        }
    }

    async fn try_collect_search(&self, query: &str, limit: usize) -> Result<Vec<EventRecord>> {
        let url = self
            .client()
            .url(&format!("/search?searchTerm={}", urlencoding::encode(query)));
        let html = self.client().fetch_html(&url).await?;

        let doc = Html::parse_document(&html);
        let mut events: Vec<EventRecord> = structured::first_event_record(&doc).into_iter().collect();
        debug!(query = %query, count = events.len(), "structured-data pass");

        if events.is_empty() {
            let base = Url::parse(self.client().base_url())
                .map_err(|_| ScrapeError::InvalidUrl { url: url.clone() })?;
            events = dom::search_anchors(&doc, &base);
            debug!(query = %query, count = events.len(), "anchor fallback pass");
        }

        let mut events = dedupe_by(events, |e| e.production_id.clone());
        events.truncate(limit);
        Ok(events)
    }
}
