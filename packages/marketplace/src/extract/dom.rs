//! DOM fallback extraction over visible markup.
//!
//! Runs only when the structured-data pass comes up short. Card-like
//! elements are found through a prioritized selector set (semantic class
//! names, test-id attributes, then bare production anchors); nested text
//! is pulled with the same first-non-empty fallback. Candidates without a
//! resolvable production id are dropped silently.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::identity::{production_id, FallbackIds};
use crate::price::parse_display_price;
use crate::types::{EventRecord, TicketListing};

const EVENT_CARDS: &str = r#".event-card, [data-testid="event-card"], a[href*="/production/"]"#;
const EVENT_TITLES: [&str; 3] = ["h3", ".event-title", r#"[data-testid="event-title"]"#];
const SEARCH_TITLES: [&str; 3] = ["h3", ".title", r#"[data-testid="title"]"#];
const VENUES: [&str; 2] = [".venue", r#"[data-testid="venue"]"#];
const PRICES: [&str; 2] = [".price", r#"[data-testid="price"]"#];
const LISTING_CARDS: &str = r#".listing-card, [data-testid="listing"]"#;
const SECTIONS: [&str; 2] = [".section", r#"[data-testid="section"]"#];
const ZONES: [&str; 2] = [".zone", r#"[data-testid="zone"]"#];

/// First non-empty text among the prioritized selectors, trimmed.
fn text_of(el: ElementRef<'_>, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            for found in el.select(&selector) {
                let text = found.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// The candidate's link: itself when it is an anchor, else its first
/// descendant anchor.
fn card_href(el: ElementRef<'_>) -> Option<String> {
    if el.value().name() == "a" {
        return el.value().attr("href").map(str::to_string);
    }
    let anchor = Selector::parse("a").ok()?;
    el.select(&anchor)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

/// Resolve an href to an absolute URL under the marketplace origin.
fn absolute_url(href: &str, base: &Url) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        Some(href.to_string())
    } else {
        base.join(href).ok().map(|u| u.to_string())
    }
}

fn first_image(el: ElementRef<'_>) -> Option<String> {
    let img = Selector::parse("img[src]").ok()?;
    el.select(&img)
        .next()
        .and_then(|i| i.value().attr("src"))
        .map(str::to_string)
}

/// Scan the home feed for visible event cards.
pub fn event_cards(doc: &Html, base: &Url) -> Vec<EventRecord> {
    let selector = match Selector::parse(EVENT_CARDS) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    doc.select(&selector)
        .filter_map(|el| {
            let href = card_href(el)?;
            if !href.contains("/production/") {
                return None;
            }
            let url = absolute_url(&href, base)?;
            let id = production_id(&url)?;

            let title = text_of(el, &EVENT_TITLES).unwrap_or_else(|| "Event".to_string());
            let price = text_of(el, &PRICES).as_deref().and_then(parse_display_price);

            Some(EventRecord {
                id: Some(id.clone()),
                production_id: Some(id),
                name: title,
                locale_date: None,
                venue_name: text_of(el, &VENUES),
                city: None,
                state: None,
                image_url: first_image(el),
                lowest_price: price,
                url: Some(url),
            })
        })
        .collect()
}

/// Scan a search result page for production anchors. The anchor's own
/// text stands in for a title element, truncated at the first pipe
/// (anchors carry "Name | Venue | Date" strings).
pub fn search_anchors(doc: &Html, base: &Url) -> Vec<EventRecord> {
    let selector = match Selector::parse(r#"a[href*="/production/"]"#) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    doc.select(&selector)
        .filter_map(|el| {
            let href = el.value().attr("href")?;
            let url = absolute_url(href, base)?;
            let id = production_id(&url)?;

            let raw_title = text_of(el, &SEARCH_TITLES)
                .unwrap_or_else(|| el.text().collect::<String>().trim().to_string());
            let title = raw_title
                .split('|')
                .next()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| "Event".to_string());

            let price = text_of(el, &PRICES).as_deref().and_then(parse_display_price);

            Some(EventRecord {
                id: Some(id.clone()),
                production_id: Some(id),
                name: title,
                locale_date: None,
                venue_name: text_of(el, &VENUES),
                city: None,
                state: None,
                image_url: first_image(el),
                lowest_price: price,
                url: Some(url),
            })
        })
        .collect()
}

/// Scan a ticket page for visible listing cards. Cards never expose a
/// listing URL, so ids are always generated tokens. Cards without a
/// dollar-prefixed price are dropped.
pub fn listing_cards(doc: &Html, quantity: u32, ids: &mut FallbackIds) -> Vec<TicketListing> {
    let selector = match Selector::parse(LISTING_CARDS) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let mut listings = Vec::new();
    for el in doc.select(&selector) {
        let price = match text_of(el, &PRICES).as_deref().and_then(parse_display_price) {
            Some(p) => p,
            None => continue,
        };

        let section = text_of(el, &SECTIONS);
        let zone = text_of(el, &ZONES)
            .or_else(|| section.clone())
            .unwrap_or_else(|| "General".to_string());

        listings.push(TicketListing {
            id: ids.next_id(),
            zone,
            section,
            row: text_of(el, &[".row"]),
            quantity,
            price,
            score: None,
            attributes: vec![],
        });
    }

    listings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.vividseats.com").unwrap()
    }

    #[test]
    fn test_event_cards_from_semantic_classes() {
        let html = Html::parse_document(
            r#"<div class="event-card">
                 <a href="/production/512345/the-nutcracker"></a>
                 <h3>The Nutcracker</h3>
                 <span class="venue">State Theatre</span>
                 <span class="price">From $64.50</span>
                 <img src="https://img.example/a.jpg">
               </div>"#,
        );
        let records = event_cards(&html, &base());
        // The card and its inner anchor both match the candidate set; the
        // pipeline's dedupe pass keeps the first-seen (card) record.
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].production_id, records[1].production_id);

        let record = &records[0];
        assert_eq!(record.production_id.as_deref(), Some("512345"));
        assert_eq!(record.name, "The Nutcracker");
        assert_eq!(record.venue_name.as_deref(), Some("State Theatre"));
        assert_eq!(record.lowest_price, Some(64.5));
        assert_eq!(
            record.url.as_deref(),
            Some("https://www.vividseats.com/production/512345/the-nutcracker")
        );
        assert_eq!(record.locale_date, None);
    }

    #[test]
    fn test_event_cards_bare_anchor_and_missing_title() {
        let html = Html::parse_document(r#"<a href="/production/777/show"></a>"#);
        let records = event_cards(&html, &base());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Event");
        assert_eq!(records[0].production_id.as_deref(), Some("777"));
    }

    #[test]
    fn test_event_cards_drop_unresolvable_identity() {
        let html = Html::parse_document(
            r#"<div class="event-card"><a href="/production/coming-soon">Teaser</a></div>
               <div class="event-card"><a href="/venues/123">Venue</a></div>"#,
        );
        assert!(event_cards(&html, &base()).is_empty());
    }

    #[test]
    fn test_search_anchor_title_truncated_at_pipe() {
        let html = Html::parse_document(
            r#"<a href="https://www.vividseats.com/production/888/x">Hamilton | Orpheum Theatre | Oct 3</a>"#,
        );
        let records = search_anchors(&html, &base());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Hamilton");
        assert_eq!(records[0].production_id.as_deref(), Some("888"));
    }

    #[test]
    fn test_listing_cards_zone_falls_back_to_section() {
        let html = Html::parse_document(
            r#"<div class="listing-card">
                 <span class="section">Balcony 2</span>
                 <span class="price">$89</span>
                 <span class="row">F</span>
               </div>
               <div data-testid="listing">
                 <span class="zone">Floor</span>
                 <span class="price">$210.50</span>
               </div>
               <div class="listing-card"><span class="price">sold out</span></div>"#,
        );
        let mut ids = FallbackIds::new();
        let listings = listing_cards(&html, 2, &mut ids);

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].zone, "Balcony 2");
        assert_eq!(listings[0].section.as_deref(), Some("Balcony 2"));
        assert_eq!(listings[0].row.as_deref(), Some("F"));
        assert_eq!(listings[0].price, 89.0);
        assert_eq!(listings[0].quantity, 2);
        assert_eq!(listings[0].id, "listing-1");

        assert_eq!(listings[1].zone, "Floor");
        assert_eq!(listings[1].section, None);
        assert_eq!(listings[1].id, "listing-2");
    }
}
