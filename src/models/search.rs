use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identity of a physical part: the catalog part number plus its color name.
///
/// Used both to merge duplicate demand during ingestion and to aggregate
/// outstanding demand across sets during search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartKey {
    pub part_id: String,
    pub color: String,
}

impl PartKey {
    pub fn new(part_id: impl Into<String>, color: impl Into<String>) -> Self {
        Self { part_id: part_id.into(), color: color.into() }
    }
}

/// Outstanding demand for one (part, color) pair across every incomplete set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeededAggregate {
    pub key: PartKey,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub total_needed: u64,
    /// Set ids in first-seen scan order
    pub sets_needing: Vec<String>,
    /// Union of the contributing entries' search tokens
    #[serde(skip)]
    pub tokens: BTreeSet<String>,
}

impl NeededAggregate {
    pub fn part_id(&self) -> &str {
        &self.key.part_id
    }

    pub fn color(&self) -> &str {
        &self.key.color
    }
}
