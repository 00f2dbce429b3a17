//! Collapse duplicate part demand and shape it into a [`Record`].
//!
//! The same (part, color) pair can appear in a set's own inventory and in any
//! number of its minifigures. Each pair ends up as exactly one line whose
//! quantity is the sum of every source, minifigure lines counted once per copy.

use std::collections::HashMap;

use crate::catalog::CategoryResolver;
use crate::error::Result;
use crate::models::{CatalogPartEntry, PartEntry, PartKey, RawCollection, Record, StickerEntry};
use crate::search::tokenize_identity;

/// Word in a part name that marks it as a sticker sheet
const STICKER_MARKER: &str = "sticker";

/// One deduplicated requirement before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedLine {
    pub key: PartKey,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub quantity: u32,
}

/// Accumulates demand keyed by (part, color), keeping first-seen order
#[derive(Debug, Default)]
pub struct DemandMerger {
    lines: Vec<MergedLine>,
    positions: HashMap<PartKey, usize>,
}

impl DemandMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an entry, resolving its category on first sight
    pub fn add<F>(&mut self, entry: &CatalogPartEntry, quantity: u32, categories: &mut CategoryResolver<F>)
    where
        F: FnMut(u32) -> Result<String>,
    {
        let key = PartKey::new(&entry.part.part_num, &entry.color.name);

        if let Some(&position) = self.positions.get(&key) {
            let line = &mut self.lines[position];
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(MergedLine {
            key: key.clone(),
            name: entry.part.name.clone(),
            category: categories.resolve(entry.part.part_cat_id),
            image_url: entry.part.part_img_url.clone(),
            quantity,
        });
        self.positions.insert(key, self.lines.len() - 1);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<MergedLine> {
        self.lines
    }
}

/// Merge a set's direct inventory with its minifigure inventories, dropping spares
pub fn merge_demand<F>(raw: &RawCollection, categories: &mut CategoryResolver<F>) -> Vec<MergedLine>
where
    F: FnMut(u32) -> Result<String>,
{
    let mut merger = DemandMerger::new();

    for entry in raw.parts.iter().filter(|e| !e.is_spare) {
        merger.add(entry, entry.quantity, categories);
    }

    for group in &raw.subassemblies {
        for entry in group.parts.iter().filter(|e| !e.is_spare) {
            merger.add(entry, entry.quantity.saturating_mul(group.multiplier), categories);
        }
    }

    merger.into_lines()
}

/// Case-insensitive substring match on the part name
pub fn is_sticker(name: &str) -> bool {
    name.to_lowercase().contains(STICKER_MARKER)
}

/// Split merged lines into tracked parts and stickers, attaching search tokens
pub fn classify(lines: Vec<MergedLine>) -> (Vec<PartEntry>, Vec<StickerEntry>) {
    let mut parts = Vec::new();
    let mut stickers = Vec::new();

    for line in lines {
        let search_tokens =
            tokenize_identity(&line.key.part_id, &line.name, &line.category, &line.key.color);

        if is_sticker(&line.name) {
            stickers.push(StickerEntry {
                part_id: line.key.part_id,
                name: line.name,
                category: line.category,
                color: line.key.color,
                quantity: line.quantity,
                image_url: line.image_url,
                search_tokens,
            });
        } else {
            parts.push(PartEntry {
                part_id: line.key.part_id,
                name: line.name,
                category: line.category,
                color: line.key.color,
                need: line.quantity,
                have: 0,
                image_url: line.image_url,
                search_tokens,
            });
        }
    }

    (parts, stickers)
}

/// Build a fresh, not-yet-completed record from raw catalog data
pub fn build_record<F>(set_id: &str, raw: RawCollection, categories: &mut CategoryResolver<F>) -> Record
where
    F: FnMut(u32) -> Result<String>,
{
    let (parts, stickers) = classify(merge_demand(&raw, categories));

    Record {
        id: set_id.to_string(),
        name: raw.info.name,
        year: raw.info.year,
        declared_part_count: raw.info.num_parts,
        image_url: raw.info.set_img_url,
        completed: false,
        parts_found: 0,
        notes: String::new(),
        parts,
        stickers,
    }
}
