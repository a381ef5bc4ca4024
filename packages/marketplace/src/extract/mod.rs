//! Extraction strategies over fetched marketplace documents.
//!
//! Two strategies, run in priority order: embedded structured data
//! ([`structured`]) first, visible-markup scanning ([`dom`]) as fallback
//! when the structured pass comes up short. Each strategy is a pure
//! function from a parsed document to a record sequence; the pipeline
//! layer owns the threshold gates.

pub mod dom;
pub mod structured;
