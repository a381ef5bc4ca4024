//! Ticket listing extraction and per-zone aggregation.

use std::collections::HashMap;

use scraper::Html;
use tracing::{debug, warn};

use super::MarketplaceScraper;
use crate::dedupe::dedupe_by;
use crate::error::Result;
use crate::extract::{dom, structured};
use crate::identity::FallbackIds;
use crate::types::{TicketListing, TicketResults, ZoneSummary};

impl MarketplaceScraper {
    /// Resolve a production's ticket listings for a party of `quantity`,
    /// with per-zone rollups.
    ///
    /// Structured offers first, visible listing cards when no offers
    /// exist. Listings are deduplicated by the `(zone, section, price)`
    /// composite, then grouped by zone in first-seen order. Total failure
    /// returns an empty result, never an error.
    pub async fn resolve_tickets(&self, id: &str, quantity: u32) -> TicketResults {
        match self.try_resolve_tickets(id, quantity).await {
            Ok(results) => results,
            Err(e) => {
                warn!(id = %id, error = %e, "ticket scrape failed");
                TicketResults::default()
            }
        }
    }

    async fn try_resolve_tickets(&self, id: &str, quantity: u32) -> Result<TicketResults> {
        let url = self
            .client()
            .url(&format!("/production/{}/tickets?quantity={}", id, quantity));
        let html = self.client().fetch_html(&url).await?;

        let doc = Html::parse_document(&html);
        let mut ids = FallbackIds::new();

        let mut listings = structured::offer_listings(&doc, quantity, &mut ids);
        debug!(id = %id, count = listings.len(), "structured offer pass");

        if listings.is_empty() {
            listings = dom::listing_cards(&doc, quantity, &mut ids);
            debug!(id = %id, count = listings.len(), "listing card fallback pass");
        }

        let listings = dedupe_by(listings, |l| Some(l.identity_key()));
        let zones = zone_summaries(&listings);

        Ok(TicketResults { listings, zones })
    }
}

/// Group listings by zone (first-seen order) and roll up each group.
///
/// Groups are non-empty by construction, so the minimum fold never
/// returns its infinity seed.
fn zone_summaries(listings: &[TicketListing]) -> Vec<ZoneSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&TicketListing>> = HashMap::new();

    for listing in listings {
        let group = groups.entry(listing.zone.as_str()).or_default();
        if group.is_empty() {
            order.push(listing.zone.as_str());
        }
        group.push(listing);
    }

    order
        .into_iter()
        .map(|zone| {
            let group = &groups[zone];
            ZoneSummary {
                zone: zone.to_string(),
                lowest_price: group
                    .iter()
                    .map(|l| l.price)
                    .fold(f64::INFINITY, f64::min),
                total_tickets: group.iter().map(|l| l.quantity).sum(),
                total_listings: group.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(zone: &str, section: Option<&str>, price: f64, quantity: u32) -> TicketListing {
        TicketListing {
            id: format!("{}-{}", zone, price),
            zone: zone.to_string(),
            section: section.map(String::from),
            row: None,
            quantity,
            price,
            score: None,
            attributes: vec![],
        }
    }

    #[test]
    fn test_zone_summaries_rollup() {
        let listings = vec![
            listing("Floor", Some("A"), 120.0, 2),
            listing("Balcony", Some("B1"), 55.0, 2),
            listing("Floor", Some("C"), 95.5, 4),
        ];
        let zones = zone_summaries(&listings);

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].zone, "Floor");
        assert_eq!(zones[0].lowest_price, 95.5);
        assert_eq!(zones[0].total_tickets, 6);
        assert_eq!(zones[0].total_listings, 2);

        assert_eq!(zones[1].zone, "Balcony");
        assert_eq!(zones[1].lowest_price, 55.0);
        assert_eq!(zones[1].total_listings, 1);
    }

    #[test]
    fn test_zone_summaries_empty() {
        assert!(zone_summaries(&[]).is_empty());
    }

    #[test]
    fn test_dedupe_then_rollup_matches_contract() {
        // {A,100}, {A,100}, {B,50} -> 2 listings, zones A(100)/B(50)
        let listings = vec![
            listing("A", None, 100.0, 2),
            listing("A", None, 100.0, 2),
            listing("B", None, 50.0, 2),
        ];
        let deduped = dedupe_by(listings, |l| Some(l.identity_key()));
        assert_eq!(deduped.len(), 2);

        let zones = zone_summaries(&deduped);
        assert_eq!(zones.len(), 2);
        assert_eq!((zones[0].zone.as_str(), zones[0].lowest_price), ("A", 100.0));
        assert_eq!(zones[0].total_listings, 1);
        assert_eq!((zones[1].zone.as_str(), zones[1].lowest_price), ("B", 50.0));
        assert_eq!(zones[1].total_listings, 1);
    }
}
