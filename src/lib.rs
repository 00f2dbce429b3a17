//! Brick Tracker - Track parts collected for LEGO sets
//!
//! This library ingests sets from a parts catalog and tracks how many of each
//! part you have. It supports:
//!
//! - Merging a set's direct inventory with its minifigures' inventories into one
//!   deduplicated list per (part, color)
//! - Separating sticker sheets from tracked parts
//! - Storing one JSON file per set, with completion derived from progress
//! - Searching every incomplete set for parts still needed, by whole-word match
//!
//! # Example
//!
//! ```no_run
//! use brick_tracker::{FileRecordStore, Tracker};
//!
//! let mut tracker = Tracker::new(FileRecordStore::new("/home/alice/.local/share/brick-tracker/sets"));
//! tracker.set_have("6020-1", 0, 4)?;
//! for part in tracker.find_needed("3001 red")? {
//!     println!("{} {}: {} needed by {:?}", part.part_id(), part.color(), part.total_needed, part.sets_needing);
//! }
//! # Ok::<(), brick_tracker::TrackerError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod ingest;
pub mod models;
pub mod search;
pub mod store;
pub mod tracker;
pub mod utils;

// Re-export commonly used types
pub use catalog::{CatalogSource, RebrickableClient};
pub use error::{CatalogEndpoint, TrackerError};
pub use ingest::ingest;
pub use models::{NeededAggregate, PartEntry, PartKey, Record, StickerEntry};
pub use search::{search, tokenize};
pub use store::{FileRecordStore, InMemoryRecordStore, RecordRepository};
pub use tracker::Tracker;
