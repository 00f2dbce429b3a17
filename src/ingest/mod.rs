//! Turning catalog data for one set into a stored [`Record`].
//!
//! # Error Handling Strategy
//!
//! Ingestion is all-or-nothing:
//!
//! - **Duplicate ids** are rejected before any catalog query is made.
//! - **Catalog failures** (set info, parts, minifigs, minifig parts) abort the call with
//!   an error naming the endpoint. Nothing is written.
//! - **Category lookups** are the exception: a failed lookup degrades to `"Unknown"`
//!   for that category instead of failing the set.

pub mod fetch;
pub mod merge;

pub use fetch::fetch_collection;
pub use merge::{DemandMerger, MergedLine, build_record, classify, is_sticker, merge_demand};

use tracing::info;

use crate::catalog::{CatalogSource, CategoryResolver};
use crate::error::{Result, TrackerError};
use crate::models::Record;
use crate::store::RecordRepository;

/// Fetch, merge, and persist a new set
///
/// The category cache lives only for the duration of this call.
///
/// # Errors
///
/// - [`TrackerError::Validation`] if `set_id` is blank
/// - [`TrackerError::DuplicateRecord`] if the set is already tracked
/// - [`TrackerError::CatalogFetch`] if any catalog query fails
pub fn ingest<C, R>(set_id: &str, catalog: &C, store: &mut R) -> Result<Record>
where
    C: CatalogSource + ?Sized,
    R: RecordRepository + ?Sized,
{
    if set_id.trim().is_empty() {
        return Err(TrackerError::validation("set id cannot be empty"));
    }
    if store.exists(set_id)? {
        return Err(TrackerError::DuplicateRecord { id: set_id.to_string() });
    }

    let raw = fetch_collection(catalog, set_id)?;
    let minifigs = raw.subassemblies.len();

    let mut categories = CategoryResolver::new(|id| catalog.fetch_category(id).map(|c| c.name));
    let record = build_record(set_id, raw, &mut categories);

    store.create(&record)?;

    info!(
        set_id,
        name = %record.name,
        parts = record.parts.len(),
        stickers = record.stickers.len(),
        minifigs,
        categories = categories.cached(),
        "created set"
    );

    Ok(record)
}
