//! Cross-set search for parts that are still needed.
//!
//! - [`tokenize`] - Shared word splitter used at ingestion and for matching
//! - [`SearchQuery`] - Sanitized, lowercase AND terms
//! - [`NeededIndex`] - Outstanding demand aggregated by (part, color)
//! - [`search`] - Scan a store and return matching aggregates

pub mod aggregate;
pub mod query;
pub mod tokenizer;

pub use aggregate::{NeededIndex, aggregate_needed, matches_query, search, search_records};
pub use query::SearchQuery;
pub use tokenizer::{tokenize, tokenize_identity};
