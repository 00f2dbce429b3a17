//! Data models for tracked sets and catalog data.
//!
//! - [`Record`] - One tracked set with its [`PartEntry`] and [`StickerEntry`] lines
//! - [`PartKey`] - (part number, color) identity used for merging and aggregation
//! - [`NeededAggregate`] - Cross-set outstanding demand built per search call
//! - [`catalog`] - Raw catalog response shapes consumed by ingestion

pub mod catalog;
pub mod record;
pub mod search;

pub use catalog::{
    CatalogCategory, CatalogColor, CatalogMinifig, CatalogPart, CatalogPartEntry, CatalogSet,
    Page, RawCollection, SubassemblyGroup,
};
pub use record::{PartEntry, Record, StickerEntry, check_progress};
pub use search::{NeededAggregate, PartKey};
