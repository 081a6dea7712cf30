use super::{EntryStore, next_id};
use crate::entry::{Entry, EntryId, RawEntry};
use anyhow::Result;

/// Volatile store, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for MemoryStore {
    fn load_all(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    fn insert(&mut self, raw: RawEntry) -> Result<Entry> {
        let entry = raw.into_entry(next_id(&self.entries)?);
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    fn delete_by_id(&mut self, id: EntryId) -> Result<()> {
        self.entries.retain(|e| e.id != id);
        Ok(())
    }
}
