use crate::models::{PartEntry, Record};

/// Derive `completed` and `parts_found` from the part lines
///
/// A set with no part lines is vacuously complete.
pub fn recompute(mut record: Record) -> Record {
    record.completed = record.parts.iter().all(PartEntry::is_satisfied);
    record.parts_found = record.parts.iter().map(|p| u64::from(p.have)).sum();
    record
}
