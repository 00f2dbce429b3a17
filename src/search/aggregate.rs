use std::collections::HashMap;

use tracing::{debug, warn};

use super::query::SearchQuery;
use crate::error::Result;
use crate::models::{NeededAggregate, PartKey, Record};
use crate::store::RecordRepository;

/// Outstanding demand across sets, keyed by (part, color), in first-seen order
#[derive(Debug, Default)]
pub struct NeededIndex {
    aggregates: Vec<NeededAggregate>,
    positions: HashMap<PartKey, usize>,
}

impl NeededIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one set's unsatisfied part lines into the index
    ///
    /// Completed sets contribute nothing, even when individual lines still show a
    /// shortfall.
    pub fn add_record(&mut self, record: &Record) {
        if record.completed {
            return;
        }

        for part in record.parts.iter().filter(|p| !p.is_satisfied()) {
            let key = PartKey::new(&part.part_id, &part.color);
            let position = match self.positions.get(&key) {
                Some(&position) => position,
                None => {
                    self.aggregates.push(NeededAggregate {
                        key: key.clone(),
                        name: part.name.clone(),
                        category: part.category.clone(),
                        image_url: part.image_url.clone(),
                        total_needed: 0,
                        sets_needing: Vec::new(),
                        tokens: Default::default(),
                    });
                    self.positions.insert(key, self.aggregates.len() - 1);
                    self.aggregates.len() - 1
                }
            };

            let aggregate = &mut self.aggregates[position];
            // Records are folded one at a time, so a repeat id can only be the last one
            if aggregate.sets_needing.last() != Some(&record.id) {
                aggregate.sets_needing.push(record.id.clone());
            }
            aggregate.total_needed += u64::from(part.shortfall());
            aggregate.tokens.extend(part.search_tokens.iter().cloned());
        }
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    pub fn get(&self, key: &PartKey) -> Option<&NeededAggregate> {
        self.positions.get(key).map(|&position| &self.aggregates[position])
    }

    /// Keep only aggregates matching every query term, preserving scan order
    pub fn filter(self, query: &SearchQuery) -> Vec<NeededAggregate> {
        self.aggregates.into_iter().filter(|aggregate| matches_query(aggregate, query)).collect()
    }
}

/// Build the cross-set index from records in iteration order
pub fn aggregate_needed<'a, I>(records: I) -> NeededIndex
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut index = NeededIndex::new();
    for record in records {
        index.add_record(record);
    }
    index
}

/// AND semantics: every term must be one of the aggregate's tokens verbatim
pub fn matches_query(aggregate: &NeededAggregate, query: &SearchQuery) -> bool {
    query.terms.iter().all(|term| aggregate.tokens.contains(term))
}

/// Search already-loaded records
pub fn search_records<'a, I>(query: &SearchQuery, records: I) -> Vec<NeededAggregate>
where
    I: IntoIterator<Item = &'a Record>,
{
    if query.is_empty() {
        return Vec::new();
    }
    aggregate_needed(records).filter(query)
}

/// Find outstanding parts across every stored set that match `query`
///
/// Sets are scanned in store iteration order. A set that fails to load is logged
/// and skipped; the rest of the scan is unaffected.
///
/// # Errors
///
/// Returns an error only if the store cannot enumerate its ids.
pub fn search<R>(query: &str, store: &R) -> Result<Vec<NeededAggregate>>
where
    R: RecordRepository + ?Sized,
{
    let query = SearchQuery::parse(query);
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let mut index = NeededIndex::new();
    let mut skipped = 0;
    let ids = store.list_ids()?;

    for id in &ids {
        match store.load(id) {
            Ok(record) => index.add_record(&record),
            Err(e) => {
                skipped += 1;
                warn!(set_id = %id, error = %e, "skipping set during search");
            }
        }
    }

    let results = index.filter(&query);
    debug!(
        sets = ids.len(),
        skipped,
        matches = results.len(),
        terms = ?query.terms,
        "search complete"
    );

    Ok(results)
}
