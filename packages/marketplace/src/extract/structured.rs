//! Structured-data (JSON-LD) extraction.
//!
//! The marketplace embeds machine-readable event metadata in
//! `script[type="application/ld+json"]` blocks. This is the preferred
//! source: it carries names, dates, and offer prices that the visible
//! markup obfuscates. A malformed block is skipped on its own; it never
//! aborts the pass.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::identity::{path_id, production_id, FallbackIds, PathMarker};
use crate::price::price_value;
use crate::types::{EventRecord, PerformerRef, ProductionDetail, TicketListing};

/// Parse every structured-data block on the document, dropping blocks
/// that are not valid JSON.
fn blocks(doc: &Html) -> Vec<Value> {
    let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
        Ok(s) => s,
        Err(_) => return vec![],
    };
    doc.select(&selector)
        .filter_map(|el| {
            let raw = el.text().collect::<String>();
            serde_json::from_str(&raw).ok()
        })
        .collect()
}

fn is_event(value: &Value) -> bool {
    value.get("@type").and_then(Value::as_str) == Some("Event")
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// `image` comes as a plain string or a list; take the first element.
fn image_url(event: &Value) -> Option<String> {
    match event.get("image") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(items)) => items
            .first()
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

/// Offers appear as a single object or a list of objects.
fn offers_of(value: &Value) -> Vec<&Value> {
    match value.get("offers") {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(offer @ Value::Object(_)) => vec![offer],
        _ => vec![],
    }
}

/// Canonical event URL: the block's own `url`, else the offer URL.
fn event_url(event: &Value) -> Option<String> {
    str_field(event, "url").or_else(|| offers_of(event).first().and_then(|o| str_field(o, "url")))
}

/// Build an [`EventRecord`] from one qualifying Event object.
///
/// A block missing `name` or `startDate` yields nothing; partial records
/// are not produced.
fn event_record(event: &Value) -> Option<EventRecord> {
    let name = str_field(event, "name")?;
    let locale_date = str_field(event, "startDate")?;

    let url = event_url(event);
    let id = url.as_deref().and_then(production_id);

    let location = event.get("location");
    let address = location.and_then(|l| l.get("address"));

    let lowest_price = event
        .get("offers")
        .and_then(|o| o.get("lowPrice"))
        .and_then(price_value);

    Some(EventRecord {
        id: id.clone(),
        production_id: id,
        name,
        locale_date: Some(locale_date),
        venue_name: location.and_then(|l| str_field(l, "name")),
        city: address.and_then(|a| str_field(a, "addressLocality")),
        state: address.and_then(|a| str_field(a, "addressRegion")),
        image_url: image_url(event),
        lowest_price,
        url,
    })
}

/// Extract one record per qualifying Event block on the document.
///
/// A top-level array is searched for its first Event member; a bare
/// object qualifies directly.
pub fn event_records(doc: &Html) -> Vec<EventRecord> {
    blocks(doc)
        .iter()
        .filter_map(|block| match block {
            Value::Array(items) => items.iter().find(|v| is_event(v)),
            other if is_event(other) => Some(other),
            _ => None,
        })
        .filter_map(event_record)
        .collect()
}

/// Search pages embed at most one canonical event, so only the first
/// qualifying block counts. The record must carry a resolvable
/// production id to qualify.
pub fn first_event_record(doc: &Html) -> Option<EventRecord> {
    blocks(doc)
        .iter()
        .filter_map(|block| match block {
            Value::Array(items) => items.first(),
            other => Some(other),
        })
        .filter(|candidate| is_event(candidate))
        .filter_map(event_record)
        .find(|record| record.production_id.is_some())
}

/// Normalize the document's first structured block into a
/// [`ProductionDetail`]. The block must be a lone Event object; anything
/// else yields `None`.
pub fn production_detail(doc: &Html, id: &str) -> Option<ProductionDetail> {
    let all = blocks(doc);
    let event = all.first()?;
    if !is_event(event) {
        return None;
    }

    let performers = match event.get("performer") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|p| PerformerRef {
                id: str_field(p, "url")
                    .and_then(|u| path_id(&u, PathMarker::Performer))
                    .unwrap_or_default(),
                name: str_field(p, "name"),
                image_url: str_field(p, "image"),
            })
            .collect(),
        _ => vec![],
    };

    let location = event.get("location");
    let address = location.and_then(|l| l.get("address"));

    Some(ProductionDetail {
        id: id.to_string(),
        name: str_field(event, "name"),
        date: str_field(event, "startDate"),
        venue: location.and_then(|l| str_field(l, "name")),
        city: address.and_then(|a| str_field(a, "addressLocality")),
        state: address.and_then(|a| str_field(a, "addressRegion")),
        image_url: image_url(event),
        performers,
    })
}

/// Extract ticket listings from structured offer data.
///
/// Every block's offers are scanned; an offer qualifies when it declares
/// both a price and an availability. Offers without numeric price content
/// are skipped (a listing's price is always numeric). The zone defaults
/// to the declared `areaServed`, else `"General"`.
pub fn offer_listings(doc: &Html, quantity: u32, ids: &mut FallbackIds) -> Vec<TicketListing> {
    let mut listings = Vec::new();

    for block in blocks(doc) {
        for offer in offers_of(&block) {
            let has_price = offer.get("price").map(|v| !v.is_null()).unwrap_or(false);
            let has_availability = offer
                .get("availability")
                .map(|v| !v.is_null())
                .unwrap_or(false);
            if !has_price || !has_availability {
                continue;
            }

            let price = match offer.get("price").and_then(price_value) {
                Some(p) => p,
                None => continue,
            };

            let id = str_field(offer, "url")
                .and_then(|u| path_id(&u, PathMarker::Listing))
                .unwrap_or_else(|| ids.next_id());

            let section = str_field(offer, "areaServed");
            listings.push(TicketListing {
                id,
                zone: section.clone().unwrap_or_else(|| "General".to_string()),
                section,
                row: None,
                quantity,
                price,
                score: None,
                attributes: vec![],
            });
        }
    }

    listings
}
