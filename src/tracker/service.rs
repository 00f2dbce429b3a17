use serde::Serialize;
use tracing::warn;

use crate::catalog::CatalogSource;
use crate::error::{Result, TrackerError};
use crate::ingest::ingest;
use crate::models::{NeededAggregate, PartEntry, Record, StickerEntry};
use crate::search;
use crate::store::RecordRepository;

/// A set's part and sticker lines, as shown when the set is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeededList {
    pub parts: Vec<PartEntry>,
    pub stickers: Vec<StickerEntry>,
}

/// One line of the set overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetSummary {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub completed: bool,
    pub parts_found: u64,
    pub total_needed: u64,
}

/// Entry points for a front end: create sets, record progress, search
pub struct Tracker<R> {
    store: R,
}

impl<R: RecordRepository> Tracker<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn into_store(self) -> R {
        self.store
    }

    /// Ingest a set from the catalog; fails if it is already tracked
    pub fn create_collection<C>(&mut self, catalog: &C, set_id: &str) -> Result<Record>
    where
        C: CatalogSource + ?Sized,
    {
        ingest(set_id, catalog, &mut self.store)
    }

    /// The whole stored set, including notes and progress totals
    pub fn get_collection(&self, set_id: &str) -> Result<Record> {
        self.store.load(set_id)
    }

    pub fn get_needed_list(&self, set_id: &str) -> Result<NeededList> {
        let record = self.store.load(set_id)?;
        Ok(NeededList { parts: record.parts, stickers: record.stickers })
    }

    /// Record how many of one part line are owned
    ///
    /// Accepts exactly `0..=need`; anything else is rejected and nothing is written.
    pub fn set_have(&mut self, set_id: &str, part_index: usize, value: i64) -> Result<Record> {
        if value < 0 {
            return Err(TrackerError::validation("'have' cannot be negative"));
        }

        let record = self.store.load(set_id)?;
        let mut parts = record.parts;
        let line_count = parts.len();
        let Some(part) = parts.get_mut(part_index) else {
            return Err(TrackerError::validation(format!(
                "part index {} out of range (set has {} parts)",
                part_index, line_count
            )));
        };

        if value > i64::from(part.need) {
            return Err(TrackerError::validation(format!(
                "'have' cannot be greater than 'need' ({})",
                part.need
            )));
        }
        // value is within 0..=need, so it fits
        part.have = value as u32;

        self.store.update_parts(set_id, parts)
    }

    pub fn set_notes(&mut self, set_id: &str, notes: &str) -> Result<Record> {
        self.store.update_notes(set_id, notes)
    }

    pub fn find_needed(&self, query: &str) -> Result<Vec<NeededAggregate>> {
        search::search(query, &self.store)
    }

    pub fn list_collections(&self) -> Result<Vec<String>> {
        self.store.list_ids()
    }

    /// Progress overview of every loadable set; unreadable sets are logged and skipped
    pub fn summaries(&self) -> Result<Vec<SetSummary>> {
        let mut summaries = Vec::new();

        for id in self.store.list_ids()? {
            match self.store.load(&id) {
                Ok(record) => summaries.push(SetSummary {
                    total_needed: record.total_needed(),
                    id: record.id,
                    name: record.name,
                    year: record.year,
                    completed: record.completed,
                    parts_found: record.parts_found,
                }),
                Err(e) => warn!(set_id = %id, error = %e, "skipping unreadable set"),
            }
        }

        Ok(summaries)
    }
}
