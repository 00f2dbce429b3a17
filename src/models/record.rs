use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One tracked requirement line: a part in a color, with needed and owned counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartEntry {
    pub part_id: String,
    pub name: String,
    pub category: String,
    pub color: String,
    pub need: u32,
    pub have: u32,
    pub image_url: Option<String>,
    pub search_tokens: BTreeSet<String>,
}

impl PartEntry {
    pub fn is_satisfied(&self) -> bool {
        self.have >= self.need
    }

    /// How many more pieces this line still needs
    pub fn shortfall(&self) -> u32 {
        self.need.saturating_sub(self.have)
    }
}

/// Check `have <= need` on every line, reporting the first offending index
pub fn check_progress(parts: &[PartEntry]) -> Result<(), String> {
    match parts.iter().position(|p| p.have > p.need) {
        Some(index) => Err(format!(
            "part #{} ({} {}) has {} but needs only {}",
            index, parts[index].part_id, parts[index].color, parts[index].have, parts[index].need
        )),
        None => Ok(()),
    }
}

/// Sticker sheets are listed with their quantity but never tracked for progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerEntry {
    pub part_id: String,
    pub name: String,
    pub category: String,
    pub color: String,
    pub quantity: u32,
    pub image_url: Option<String>,
    pub search_tokens: BTreeSet<String>,
}

/// Persisted state for one set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub declared_part_count: Option<u32>,
    pub image_url: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub parts_found: u64,
    #[serde(default)]
    pub notes: String,
    pub parts: Vec<PartEntry>,
    pub stickers: Vec<StickerEntry>,
}

impl Record {
    /// Total pieces needed across all part lines
    pub fn total_needed(&self) -> u64 {
        self.parts.iter().map(|p| u64::from(p.need)).sum()
    }
}
