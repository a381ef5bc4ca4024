//! Record types produced by the scraping pipeline.
//!
//! All records are immutable value objects built fresh per request; nothing
//! here outlives the request/response cycle. Field names serialize in
//! camelCase because the records cross the boundary to a JSON-rendering
//! routing layer.

use serde::{Deserialize, Serialize};

/// One event on the home feed or in search results.
///
/// Post-deduplication invariant: `production_id` is `Some` and unique
/// within a result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Mirrors `production_id`; downstream rendering keys on `id`.
    pub id: Option<String>,
    pub production_id: Option<String>,
    pub name: String,
    /// ISO datetime when the source declared one
    pub locale_date: Option<String>,
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub image_url: Option<String>,
    pub lowest_price: Option<f64>,
    pub url: Option<String>,
}

/// Sort events by date ascending, undated events last. Order among
/// undated events is preserved.
pub fn sort_by_date(events: &mut [EventRecord]) {
    events.sort_by(|a, b| match (&a.locale_date, &b.locale_date) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// A performer attached to a production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerRef {
    /// URL-derived id; empty when the performer URL carries no numeric token
    pub id: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Normalized production built from a structured-data block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionDetail {
    pub id: String,
    pub name: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub image_url: Option<String>,
    pub performers: Vec<PerformerRef>,
}

/// A resolved production.
///
/// Either the upstream JSON API payload passed through verbatim, or a
/// [`ProductionDetail`] normalized from the HTML page's structured data.
/// Both shapes are valid; callers must tolerate either. Serializes
/// transparently as whichever shape it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductionRecord {
    Raw(serde_json::Value),
    Detail(ProductionDetail),
}

/// One sellable ticket offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListing {
    /// From the listing URL when present, otherwise a generated token
    pub id: String,
    pub zone: String,
    pub section: Option<String>,
    pub row: Option<String>,
    pub quantity: u32,
    pub price: f64,
    pub score: Option<f64>,
    pub attributes: Vec<String>,
}

impl TicketListing {
    /// Deduplication identity. `(zone, section, price)` is a heuristic
    /// approximation of listing uniqueness, not a guaranteed key: two
    /// distinct listings can collide. Preserved as documented upstream
    /// behavior.
    pub fn identity_key(&self) -> (String, Option<String>, u64) {
        (self.zone.clone(), self.section.clone(), self.price.to_bits())
    }
}

/// Per-zone rollup over deduplicated listings. Recomputed on every
/// aggregation call, never cached or mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub zone: String,
    pub lowest_price: f64,
    pub total_tickets: u32,
    pub total_listings: usize,
}

/// Result of a ticket aggregation: the flat deduplicated listings plus
/// the zone rollups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketResults {
    pub listings: Vec<TicketListing>,
    pub zones: Vec<ZoneSummary>,
}
