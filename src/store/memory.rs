use std::collections::BTreeMap;

use super::{RecordRepository, validate_record};
use crate::error::{Result, TrackerError};
use crate::models::Record;

/// Map-backed store for tests and benchmarks; iterates ids in sorted order
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordStore {
    records: BTreeMap<String, Record>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordRepository for InMemoryRecordStore {
    fn create(&mut self, record: &Record) -> Result<()> {
        if record.id.is_empty() {
            return Err(TrackerError::validation("set id cannot be empty"));
        }
        validate_record(record)?;
        if self.records.contains_key(&record.id) {
            return Err(TrackerError::DuplicateRecord { id: record.id.clone() });
        }
        self.records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Record> {
        self.records.get(id).cloned().ok_or_else(|| TrackerError::NotFound { id: id.to_string() })
    }

    fn save(&mut self, record: &Record) -> Result<()> {
        validate_record(record)?;
        match self.records.get_mut(&record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(())
            }
            None => Err(TrackerError::NotFound { id: record.id.clone() }),
        }
    }

    fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.records.contains_key(id))
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        Ok(self.records.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartEntry;

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            name: "Empty".to_string(),
            year: None,
            declared_part_count: None,
            image_url: None,
            completed: false,
            parts_found: 0,
            notes: String::new(),
            parts: Vec::new(),
            stickers: Vec::new(),
        }
    }

    #[test]
    fn test_full_workflow() {
        let mut store = InMemoryRecordStore::new();
        assert!(store.is_empty());

        store.create(&record("b")).unwrap();
        store.create(&record("a")).unwrap();
        assert_eq!(store.list_ids().unwrap(), vec!["a", "b"]);

        assert!(matches!(store.create(&record("a")), Err(TrackerError::DuplicateRecord { .. })));
        assert!(matches!(store.load("c"), Err(TrackerError::NotFound { .. })));

        let updated = store.update_notes("a", "shelf 3").unwrap();
        assert_eq!(store.load("a").unwrap(), updated);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_writes_reject_over_need() {
        let mut store = InMemoryRecordStore::new();
        let mut over = record("a");
        over.parts.push(PartEntry {
            part_id: "3001".to_string(),
            name: "Brick 2 x 4".to_string(),
            category: "Bricks".to_string(),
            color: "Red".to_string(),
            need: 1,
            have: 7,
            image_url: None,
            search_tokens: Default::default(),
        });

        assert!(matches!(store.create(&over), Err(TrackerError::Validation { .. })));
        assert!(store.is_empty());

        store.create(&record("a")).unwrap();
        assert!(matches!(store.save(&over), Err(TrackerError::Validation { .. })));
        assert!(store.load("a").unwrap().parts.is_empty());
    }

    #[test]
    fn test_update_parts_on_empty_set_completes() {
        let mut store = InMemoryRecordStore::new();
        store.create(&record("empty")).unwrap();

        let updated = store.update_parts("empty", Vec::new()).unwrap();
        assert!(updated.completed);
    }
}
