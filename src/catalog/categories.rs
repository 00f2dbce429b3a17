use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;

/// Name used when a part has no category or the lookup fails
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Memoized category-id to name lookup, scoped to a single ingestion
///
/// Failed lookups resolve to [`UNKNOWN_CATEGORY`] and are cached too, so a
/// failing id is queried at most once per ingestion.
pub struct CategoryResolver<F> {
    fetch: F,
    cache: HashMap<u32, String>,
}

impl<F> CategoryResolver<F>
where
    F: FnMut(u32) -> Result<String>,
{
    pub fn new(fetch: F) -> Self {
        Self { fetch, cache: HashMap::new() }
    }

    pub fn resolve(&mut self, category_id: Option<u32>) -> String {
        // Id 0 is the catalog's "no category"
        let Some(id) = category_id.filter(|&id| id != 0) else {
            return UNKNOWN_CATEGORY.to_string();
        };

        if let Some(name) = self.cache.get(&id) {
            return name.clone();
        }

        let name = match (self.fetch)(id) {
            Ok(name) => name,
            Err(e) => {
                debug!(category_id = id, error = %e, "category lookup failed");
                UNKNOWN_CATEGORY.to_string()
            }
        };
        self.cache.insert(id, name.clone());
        name
    }

    /// Number of distinct ids looked up so far
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
