//! Identity tokens derived from marketplace URLs.
//!
//! The marketplace embeds numeric ids in URL paths as a segment directly
//! after a fixed marker (`/production/12345`, `/listing/987`,
//! `/performer/42`). The pattern lives here once; extractors must not
//! re-derive it.

use lazy_static::lazy_static;
use regex::Regex;

/// Path markers that precede a numeric identity segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMarker {
    Production,
    Listing,
    Performer,
}

lazy_static! {
    static ref PRODUCTION_ID: Regex = Regex::new(r"production/(\d+)").unwrap();
    static ref LISTING_ID: Regex = Regex::new(r"listing/(\d+)").unwrap();
    static ref PERFORMER_ID: Regex = Regex::new(r"performer/(\d+)").unwrap();
}

/// Extract the numeric identity following `marker` from a URL or path.
///
/// Returns `None` when the URL lacks the marker or the marker is not
/// followed by digits.
pub fn path_id(url: &str, marker: PathMarker) -> Option<String> {
    let re: &Regex = match marker {
        PathMarker::Production => &PRODUCTION_ID,
        PathMarker::Listing => &LISTING_ID,
        PathMarker::Performer => &PERFORMER_ID,
    };
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Production id out of a URL, if present.
pub fn production_id(url: &str) -> Option<String> {
    path_id(url, PathMarker::Production)
}

/// Deterministic generator for listing ids when no URL-derived id exists.
///
/// Scoped to one extraction pass so repeated runs over the same document
/// produce the same ids.
#[derive(Debug, Default)]
pub struct FallbackIds {
    next: u32,
}

impl FallbackIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next fallback token.
    pub fn next_id(&mut self) -> String {
        self.next += 1;
        format!("listing-{}", self.next)
    }
}
