//! Keyed persistence of tracked sets.
//!
//! # Concurrency
//!
//! Updates are read-modify-write with no versioning or locking. Two processes
//! updating the same set will silently lose one of the updates (last writer wins).
//! Only a single process should use a data directory at a time.

pub mod file;
pub mod memory;

pub use file::FileRecordStore;
pub use memory::InMemoryRecordStore;

use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{PartEntry, Record, check_progress};
use crate::tracker::completion::recompute;

/// Reject a set with any `have > need` line before it reaches storage
pub(crate) fn validate_record(record: &Record) -> Result<()> {
    check_progress(&record.parts).map_err(TrackerError::validation)
}

/// Storage for [`Record`]s keyed by set id
pub trait RecordRepository {
    /// Store a new set, failing with [`TrackerError::DuplicateRecord`] if the id exists
    ///
    /// Lines with `have > need` are a [`TrackerError::Validation`] error.
    fn create(&mut self, record: &Record) -> Result<()>;

    /// Load a set, failing with [`TrackerError::NotFound`] if absent
    fn load(&self, id: &str) -> Result<Record>;

    /// Overwrite an existing set, failing with [`TrackerError::NotFound`] if absent
    ///
    /// Lines with `have > need` are a [`TrackerError::Validation`] error and nothing is written.
    fn save(&mut self, record: &Record) -> Result<()>;

    fn exists(&self, id: &str) -> Result<bool>;

    /// All stored ids in iteration order
    fn list_ids(&self) -> Result<Vec<String>>;

    /// Replace a set's part lines, recompute completion, and rewrite the whole set
    ///
    /// Every other field (name, stickers, notes, ...) is carried over unchanged.
    /// Lines with `have > need` are rejected before anything is written.
    fn update_parts(&mut self, id: &str, parts: Vec<PartEntry>) -> Result<Record> {
        check_progress(&parts).map_err(TrackerError::validation)?;

        let mut record = self.load(id)?;
        record.parts = parts;
        let record = recompute(record);
        self.save(&record)?;

        debug!(set_id = %id, completed = record.completed, "updated parts");
        Ok(record)
    }

    /// Replace a set's free-text notes, preserving everything else
    fn update_notes(&mut self, id: &str, notes: &str) -> Result<Record> {
        let mut record = self.load(id)?;
        record.notes = notes.to_string();
        self.save(&record)?;
        Ok(record)
    }
}
