//! Raw response shapes from the parts catalog.
//!
//! Only the fields ingestion reads are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// List endpoints wrap their items in a paged envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSet {
    pub set_num: String,
    pub name: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub num_parts: Option<u32>,
    #[serde(default)]
    pub set_img_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPart {
    pub part_num: String,
    pub name: String,
    #[serde(default)]
    pub part_cat_id: Option<u32>,
    #[serde(default)]
    pub part_img_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogColor {
    pub name: String,
}

/// One line of a set's or minifigure's inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPartEntry {
    pub part: CatalogPart,
    pub color: CatalogColor,
    pub quantity: u32,
    #[serde(default)]
    pub is_spare: bool,
}

/// A minifigure included in a set, `quantity` times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMinifig {
    pub set_num: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub id: u32,
    pub name: String,
}

/// A minifigure together with its own inventory, as fetched for one set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubassemblyGroup {
    pub code: String,
    pub multiplier: u32,
    pub parts: Vec<CatalogPartEntry>,
}

/// Everything the catalog returned for one set, before merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCollection {
    pub info: CatalogSet,
    pub parts: Vec<CatalogPartEntry>,
    pub subassemblies: Vec<SubassemblyGroup>,
}
