//! Durable entry collections.
//!
//! Every backend keeps entries most-recent-first and rewrites the whole
//! collection on each mutation.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::entry::{Entry, EntryId, RawEntry};
use anyhow::{Result, bail};
use chrono::Utc;

pub trait EntryStore {
    /// All entries, most recent insert first. A missing or unreadable backing
    /// store reads as an empty collection.
    fn load_all(&self) -> Vec<Entry>;

    /// Stamps `raw` with a fresh id, puts it at the head of the collection and
    /// persists. On failure nothing is kept and the error wraps
    /// [`JournalError::NotSaved`](crate::JournalError::NotSaved).
    fn insert(&mut self, raw: RawEntry) -> Result<Entry>;

    /// Removes the entry with `id`. Unknown ids are a no-op.
    fn delete_by_id(&mut self, id: EntryId) -> Result<()>;
}

/// Ids come from the insertion time in milliseconds, bumped past the largest
/// id already in use so that inserts within the same millisecond stay unique.
/// Fails when the largest id leaves no room above it.
pub(crate) fn next_id(entries: &[Entry]) -> Result<EntryId> {
    let now = Utc::now().timestamp_millis();
    match entries.iter().map(|e| e.id.0).max() {
        Some(max) if max >= now => match max.checked_add(1) {
            Some(id) => Ok(EntryId(id)),
            None => bail!("no entry id left above {max}"),
        },
        _ => Ok(EntryId(now)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::raw_entry;

    #[test]
    fn next_id_moves_past_existing_ids() {
        let far_future = EntryId(i64::MAX - 1);
        let entries = vec![raw_entry("2025-08-15", "a").into_entry(far_future)];
        assert_eq!(next_id(&entries).unwrap(), EntryId(i64::MAX));
    }

    #[test]
    fn next_id_fails_instead_of_wrapping_at_max() {
        let entries = vec![raw_entry("2025-08-15", "a").into_entry(EntryId(i64::MAX))];
        assert!(next_id(&entries).is_err());
    }

    #[test]
    fn next_id_on_empty_collection_is_a_timestamp() {
        let before = Utc::now().timestamp_millis();
        let id = next_id(&[]).unwrap();
        assert!(id.0 >= before);
    }
}
