//! Access to the remote parts catalog.
//!
//! [`CatalogSource`] is the query contract ingestion relies on. Every method
//! either returns the decoded data or a [`TrackerError::CatalogFetch`] naming
//! the endpoint that failed. Calls are blocking and never retried.
//!
//! [`TrackerError::CatalogFetch`]: crate::error::TrackerError::CatalogFetch

pub mod categories;
pub mod rebrickable;

pub use categories::{CategoryResolver, UNKNOWN_CATEGORY};
pub use rebrickable::RebrickableClient;

use crate::error::Result;
use crate::models::{CatalogCategory, CatalogMinifig, CatalogPartEntry, CatalogSet};

/// Requested once per list endpoint; there is no pagination beyond this
pub const PAGE_SIZE: u32 = 1000;

pub trait CatalogSource {
    /// Set metadata by set number
    fn fetch_set(&self, set_id: &str) -> Result<CatalogSet>;

    /// Direct inventory of a set, spares included
    fn fetch_set_parts(&self, set_id: &str) -> Result<Vec<CatalogPartEntry>>;

    /// Minifigures in a set with how many copies of each
    fn fetch_set_minifigs(&self, set_id: &str) -> Result<Vec<CatalogMinifig>>;

    /// Inventory of one minifigure, spares included
    fn fetch_minifig_parts(&self, minifig_id: &str) -> Result<Vec<CatalogPartEntry>>;

    fn fetch_category(&self, category_id: u32) -> Result<CatalogCategory>;
}
