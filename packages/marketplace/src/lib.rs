//! Ticket-Marketplace Scraping and Normalization Library
//!
//! Fetches live marketplace pages, extracts structured event, production,
//! and ticket-listing data from heterogeneous HTML/JSON sources,
//! reconciles multiple extraction strategies, deduplicates results, and
//! derives aggregate pricing summaries.
//!
//! # Design
//!
//! - Structured data (JSON-LD) is the preferred extraction source;
//!   DOM scanning of visible markup is the fallback, gated by a
//!   per-pipeline threshold.
//! - Every public operation absorbs failures internally and degrades to
//!   an empty or null result; nothing raises past the crate boundary.
//! - All records are immutable value objects built fresh per call; the
//!   scraper holds no cross-request mutable state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use marketplace::MarketplaceScraper;
//!
//! let scraper = MarketplaceScraper::new()?;
//!
//! let feed = scraper.collect_events(12).await;
//! let hits = scraper.collect_search("hamilton", 12).await;
//! let production = scraper.resolve_production("512345").await;
//! let tickets = scraper.resolve_tickets("512345", 2).await;
//! ```
//!
//! # Modules
//!
//! - [`pipeline`] - [`MarketplaceScraper`] and the four public operations
//! - [`extract`] - structured-data and DOM extraction strategies
//! - [`types`] - record types crossing the boundary
//! - [`price`], [`identity`], [`dedupe`] - shared parsing utilities

pub mod client;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod extract;
pub mod identity;
pub mod pipeline;
pub mod price;
pub mod types;

pub use config::MarketplaceConfig;
pub use error::{Result, ScrapeError};
pub use pipeline::MarketplaceScraper;
pub use types::{
    EventRecord, PerformerRef, ProductionDetail, ProductionRecord, TicketListing, TicketResults,
    ZoneSummary,
};
