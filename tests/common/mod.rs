//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use brick_tracker::error::{CatalogEndpoint, Result, TrackerError};
use brick_tracker::models::{
    CatalogCategory, CatalogColor, CatalogMinifig, CatalogPart, CatalogPartEntry, CatalogSet,
};
use brick_tracker::search::tokenize_identity;
use brick_tracker::utils::record_file_name;
use brick_tracker::{CatalogSource, PartEntry, Record, StickerEntry};
use tempfile::TempDir;

/// Builder for a tracked part line
pub struct PartBuilder {
    part_id: String,
    name: String,
    category: String,
    color: String,
    need: u32,
    have: u32,
}

impl PartBuilder {
    pub fn new(part_id: &str, color: &str) -> Self {
        Self {
            part_id: part_id.to_string(),
            name: "Brick 2 x 4".to_string(),
            category: "Bricks".to_string(),
            color: color.to_string(),
            need: 1,
            have: 0,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn need(mut self, need: u32) -> Self {
        self.need = need;
        self
    }

    pub fn have(mut self, have: u32) -> Self {
        self.have = have;
        self
    }

    pub fn build(&self) -> PartEntry {
        PartEntry {
            part_id: self.part_id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            color: self.color.clone(),
            need: self.need,
            have: self.have,
            image_url: None,
            search_tokens: tokenize_identity(&self.part_id, &self.name, &self.category, &self.color),
        }
    }
}

/// Builder for a stored set
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: Record {
                id: id.to_string(),
                name: format!("Set {}", id),
                year: Some(2020),
                declared_part_count: None,
                image_url: None,
                completed: false,
                parts_found: 0,
                notes: String::new(),
                parts: Vec::new(),
                stickers: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.record.completed = completed;
        self
    }

    pub fn part(mut self, part: PartBuilder) -> Self {
        self.record.parts.push(part.build());
        self
    }

    pub fn sticker(mut self, part_id: &str, name: &str, quantity: u32) -> Self {
        self.record.stickers.push(StickerEntry {
            part_id: part_id.to_string(),
            name: name.to_string(),
            category: "Stickers".to_string(),
            color: "White".to_string(),
            quantity,
            image_url: None,
            search_tokens: tokenize_identity(part_id, name, "Stickers", "White"),
        });
        self
    }

    /// `parts_found` follows the part lines; `completed` stays as given
    pub fn build(mut self) -> Record {
        self.record.parts_found = self.record.parts.iter().map(|p| u64::from(p.have)).sum();
        self.record
    }
}

/// Builder for a data directory of set files
pub struct SetDataDirBuilder {
    temp_dir: TempDir,
}

impl SetDataDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a set file the way the store would
    pub fn with_record(self, record: RecordBuilder) -> Self {
        let record = record.build();
        let json = serde_json::to_string_pretty(&record).expect("Failed to serialize record");
        self.with_raw_file(&record_file_name(&record.id), &json)
    }

    /// Write arbitrary file content into the data directory
    pub fn with_raw_file(self, file_name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(file_name), content).expect("Failed to write set file");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SetDataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn catalog_entry(part_num: &str, name: &str, color: &str, quantity: u32) -> CatalogPartEntry {
    CatalogPartEntry {
        part: CatalogPart {
            part_num: part_num.to_string(),
            name: name.to_string(),
            part_cat_id: Some(11),
            part_img_url: Some(format!("https://cdn.example.invalid/parts/{}.jpg", part_num)),
        },
        color: CatalogColor { name: color.to_string() },
        quantity,
        is_spare: false,
    }
}

pub fn spare_entry(part_num: &str, name: &str, color: &str, quantity: u32) -> CatalogPartEntry {
    CatalogPartEntry { is_spare: true, ..catalog_entry(part_num, name, color, quantity) }
}

/// In-memory catalog with per-endpoint failure injection and call counting
#[derive(Default)]
pub struct FakeCatalog {
    sets: HashMap<String, CatalogSet>,
    set_parts: HashMap<String, Vec<CatalogPartEntry>>,
    set_minifigs: HashMap<String, Vec<CatalogMinifig>>,
    minifig_parts: HashMap<String, Vec<CatalogPartEntry>>,
    categories: HashMap<u32, String>,
    failing: RefCell<Vec<CatalogEndpoint>>,
    calls: RefCell<HashMap<CatalogEndpoint, usize>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        let mut catalog = Self::default();
        catalog.categories.insert(11, "Bricks".to_string());
        catalog
    }

    pub fn with_set(mut self, set_id: &str, name: &str, parts: Vec<CatalogPartEntry>) -> Self {
        self.sets.insert(
            set_id.to_string(),
            CatalogSet {
                set_num: set_id.to_string(),
                name: name.to_string(),
                year: Some(2019),
                num_parts: Some(parts.iter().map(|p| p.quantity).sum()),
                set_img_url: Some(format!("https://cdn.example.invalid/sets/{}.jpg", set_id)),
            },
        );
        self.set_parts.insert(set_id.to_string(), parts);
        self.set_minifigs.entry(set_id.to_string()).or_default();
        self
    }

    pub fn with_minifig(
        mut self,
        set_id: &str,
        fig_id: &str,
        quantity: u32,
        parts: Vec<CatalogPartEntry>,
    ) -> Self {
        self.set_minifigs
            .entry(set_id.to_string())
            .or_default()
            .push(CatalogMinifig { set_num: fig_id.to_string(), quantity });
        self.minifig_parts.insert(fig_id.to_string(), parts);
        self
    }

    pub fn with_category(mut self, id: u32, name: &str) -> Self {
        self.categories.insert(id, name.to_string());
        self
    }

    pub fn fail(&self, endpoint: CatalogEndpoint) {
        self.failing.borrow_mut().push(endpoint);
    }

    pub fn calls(&self, endpoint: CatalogEndpoint) -> usize {
        self.calls.borrow().get(&endpoint).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }

    fn hit(&self, endpoint: CatalogEndpoint) -> Result<()> {
        *self.calls.borrow_mut().entry(endpoint).or_default() += 1;
        if self.failing.borrow().contains(&endpoint) {
            return Err(TrackerError::catalog(endpoint, "HTTP 500 Internal Server Error"));
        }
        Ok(())
    }

    fn not_found(endpoint: CatalogEndpoint) -> TrackerError {
        TrackerError::catalog(endpoint, "HTTP 404 Not Found")
    }
}

impl CatalogSource for FakeCatalog {
    fn fetch_set(&self, set_id: &str) -> Result<CatalogSet> {
        self.hit(CatalogEndpoint::SetInfo)?;
        self.sets.get(set_id).cloned().ok_or_else(|| Self::not_found(CatalogEndpoint::SetInfo))
    }

    fn fetch_set_parts(&self, set_id: &str) -> Result<Vec<CatalogPartEntry>> {
        self.hit(CatalogEndpoint::SetParts)?;
        self.set_parts.get(set_id).cloned().ok_or_else(|| Self::not_found(CatalogEndpoint::SetParts))
    }

    fn fetch_set_minifigs(&self, set_id: &str) -> Result<Vec<CatalogMinifig>> {
        self.hit(CatalogEndpoint::SetMinifigs)?;
        self.set_minifigs
            .get(set_id)
            .cloned()
            .ok_or_else(|| Self::not_found(CatalogEndpoint::SetMinifigs))
    }

    fn fetch_minifig_parts(&self, minifig_id: &str) -> Result<Vec<CatalogPartEntry>> {
        self.hit(CatalogEndpoint::MinifigParts)?;
        self.minifig_parts
            .get(minifig_id)
            .cloned()
            .ok_or_else(|| Self::not_found(CatalogEndpoint::MinifigParts))
    }

    fn fetch_category(&self, category_id: u32) -> Result<CatalogCategory> {
        self.hit(CatalogEndpoint::Category)?;
        self.categories
            .get(&category_id)
            .map(|name| CatalogCategory { id: category_id, name: name.clone() })
            .ok_or_else(|| Self::not_found(CatalogEndpoint::Category))
    }
}
