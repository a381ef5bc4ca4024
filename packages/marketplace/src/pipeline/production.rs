//! Two-phase production resolution.

use scraper::Html;
use tracing::{debug, warn};

use super::MarketplaceScraper;
use crate::error::Result;
use crate::extract::structured;
use crate::types::ProductionRecord;

/// Resolution strategies, attempted in declared order; the first success
/// short-circuits. The JSON API is preferred because its payload is
/// richer than the page's structured data.
#[derive(Debug, Clone, Copy)]
enum ResolveStrategy {
    Api,
    Html,
}

const RESOLVE_ORDER: [ResolveStrategy; 2] = [ResolveStrategy::Api, ResolveStrategy::Html];

impl MarketplaceScraper {
    /// Resolve a single production by id.
    ///
    /// Phase 1 hits the JSON API and passes any payload through verbatim.
    /// Phase 2 (on API failure) scrapes the production's HTML page and
    /// normalizes its first structured Event block. Both phases failing,
    /// or an HTML page without a structured Event, yields `None`. Phase-1
    /// failure is expected and never surfaced.
    pub async fn resolve_production(&self, id: &str) -> Option<ProductionRecord> {
        for strategy in RESOLVE_ORDER {
            match self.try_resolve(strategy, id).await {
                Ok(Some(record)) => {
                    debug!(id = %id, strategy = ?strategy, "production resolved");
                    return Some(record);
                }
                Ok(None) => {
                    debug!(id = %id, strategy = ?strategy, "no structured event on page");
                }
                Err(e) => {
                    warn!(id = %id, strategy = ?strategy, error = %e, "resolution phase failed");
                }
            }
        }
        None
    }

    async fn try_resolve(
        &self,
        strategy: ResolveStrategy,
        id: &str,
    ) -> Result<Option<ProductionRecord>> {
        match strategy {
            ResolveStrategy::Api => {
                let url = self.client().url(&format!("/api/production/{}", id));
                let payload = self.client().fetch_json(&url).await?;
                Ok(Some(ProductionRecord::Raw(payload)))
            }
            ResolveStrategy::Html => {
                let url = self.client().url(&format!("/production/{}", id));
                let html = self.client().fetch_html(&url).await?;
                let doc = Html::parse_document(&html);
                Ok(structured::production_detail(&doc, id).map(ProductionRecord::Detail))
            }
        }
    }
}
