//! Provider response parsing.
//!
//! This module turns the provider's JSON envelope into typed records:
//! - Envelope traversal (`tasks` -> `result` -> `items`)
//! - Safe field extraction with defaults
//! - Per-endpoint item mapping
//!
//! Parsing never fails. Only transport and JSON decode errors reach the caller.

mod envelope;
mod fields;
mod records;

// Re-export public API
pub use envelope::{first_result, result_items, task_results};
pub use records::{
    backlink_from_item, citation_from_item, find_ranking, keyword_from_item,
    keyword_from_suggestion, keyword_items,
};
