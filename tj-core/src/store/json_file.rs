use super::{EntryStore, next_id};
use crate::entry::{Entry, EntryId, RawEntry};
use crate::error::JournalError;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Entries kept as one pretty-printed JSON array in a single file.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the store, so readers see either the old or the new collection.
/// There is no locking: two processes writing the same file can lose entries.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating parent directories and an empty
    /// `[]` collection if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating store directory {}", parent.display()))?;
        }
        if !path.exists() {
            write_collection(&path, &[])?;
            debug!(path = %path.display(), "created empty entry store");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_collection(&self) -> Result<Vec<Entry>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn persist(&self, entries: &[Entry]) -> Result<()> {
        write_collection(&self.path, entries).map_err(|error| {
            JournalError::NotSaved {
                path: self.path.clone(),
                error,
            }
            .into()
        })
    }
}

impl EntryStore for JsonFileStore {
    fn load_all(&self) -> Vec<Entry> {
        match self.read_collection() {
            Ok(entries) => {
                debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
                entries
            }
            Err(error) => {
                warn!(path = %self.path.display(), error = ?error, "entry store unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn insert(&mut self, raw: RawEntry) -> Result<Entry> {
        let mut entries = self.load_all();
        let id = next_id(&entries).map_err(|error| JournalError::NotSaved {
            path: self.path.clone(),
            error,
        })?;
        let entry = raw.into_entry(id);
        entries.insert(0, entry.clone());
        self.persist(&entries)?;
        debug!(id = %entry.id, "entry saved");
        Ok(entry)
    }

    fn delete_by_id(&mut self, id: EntryId) -> Result<()> {
        let mut entries = self.load_all();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            debug!(%id, "no entry to delete");
            return Ok(());
        }
        self.persist(&entries)?;
        debug!(%id, "entry deleted");
        Ok(())
    }
}

/// Replaces the file at `path` with `entries` in one rename.
fn write_collection(path: &Path, entries: &[Entry]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut tmp, entries)
        .with_context(|| format!("serializing entries for {}", path.display()))?;
    tmp.write_all(b"\n")?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("flushing entries for {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::raw_entry;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn mk_store() -> (JsonFileStore, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let store = JsonFileStore::open(tmp.path().join("tj").join("journal_entries.json")).unwrap();
        (store, tmp)
    }

    #[test]
    fn open_creates_empty_array_file() {
        let (store, _tmp) = mk_store();
        assert!(store.path().exists());
        let s = fs::read_to_string(store.path()).unwrap();
        assert_eq!(s.trim(), "[]");
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn open_keeps_existing_entries() {
        let (mut store, _tmp) = mk_store();
        store.insert(raw_entry("2025-08-15", "Kept.")).unwrap();
        let reopened = JsonFileStore::open(store.path()).unwrap();
        assert_eq!(reopened.load_all().len(), 1);
    }

    #[test]
    fn loads_in_reverse_insertion_order() {
        let (mut store, _tmp) = mk_store();
        // Dates deliberately out of calendar order.
        store.insert(raw_entry("2025-08-15", "first")).unwrap();
        store.insert(raw_entry("2025-08-01", "second")).unwrap();
        store.insert(raw_entry("2025-09-30", "third")).unwrap();

        let journals: Vec<String> = store.load_all().into_iter().map(|e| e.journal).collect();
        assert_eq!(journals, vec!["third", "second", "first"]);
    }

    #[test]
    fn inserted_id_is_visible_in_next_load() {
        let (mut store, _tmp) = mk_store();
        let entry = store.insert(raw_entry("2025-08-15", "Scalped the open.")).unwrap();
        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], entry);
    }

    #[test]
    fn ids_are_unique_for_rapid_inserts() {
        let (mut store, _tmp) = mk_store();
        for i in 0..25 {
            store.insert(raw_entry("2025-08-15", &format!("note {i}"))).unwrap();
        }
        let ids: HashSet<EntryId> = store.load_all().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn delete_removes_entry_and_is_idempotent() {
        let (mut store, _tmp) = mk_store();
        let keep = store.insert(raw_entry("2025-08-15", "keep")).unwrap();
        let gone = store.insert(raw_entry("2025-08-15", "gone")).unwrap();

        store.delete_by_id(gone.id).unwrap();
        let once = store.load_all();
        store.delete_by_id(gone.id).unwrap();
        let twice = store.load_all();

        assert_eq!(once, twice);
        assert_eq!(once, vec![keep]);
        assert!(once.iter().all(|e| e.id != gone.id));
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let (mut store, _tmp) = mk_store();
        store.insert(raw_entry("2025-08-15", "only")).unwrap();
        store.delete_by_id(EntryId(-1)).unwrap();
        assert_eq!(store.load_all().len(), 1);
    }

    #[test]
    fn empty_file_loads_as_empty() {
        let (store, _tmp) = mk_store();
        fs::write(store.path(), "").unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let (store, _tmp) = mk_store();
        fs::remove_file(store.path()).unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty_and_heals_on_insert() {
        let (mut store, _tmp) = mk_store();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load_all().is_empty());

        store.insert(raw_entry("2025-08-15", "fresh start")).unwrap();
        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].journal, "fresh start");
    }

    #[test]
    fn failed_write_reports_not_saved() {
        let (mut store, _tmp) = mk_store();
        let path = store.path().to_path_buf();
        // A directory where the file should be makes the final rename fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("blocker"), "x").unwrap();

        let err = store.insert(raw_entry("2025-08-15", "lost")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JournalError>(),
            Some(JournalError::NotSaved { .. })
        ));
        assert!(path.is_dir());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn blank_confidence_keeps_the_collection_readable() {
        let (mut store, _tmp) = mk_store();
        let existing = r#"[
  {"id": 2, "date": "2025-08-15", "day": "Friday", "time": "09:00 PM",
   "news": "", "journal": "No pick.", "confidence": "", "savedAt": "x"},
  {"id": 1, "date": "2025-08-14", "day": "Thursday", "time": "09:00 PM",
   "news": "", "journal": "Picked.", "confidence": "Low", "savedAt": "x"}
]"#;
        fs::write(store.path(), existing).unwrap();
        assert_eq!(store.load_all().len(), 2);

        store.insert(raw_entry("2025-08-16", "new")).unwrap();
        let journals: Vec<String> = store.load_all().into_iter().map(|e| e.journal).collect();
        assert_eq!(journals, vec!["new", "No pick.", "Picked."]);
    }

    #[test]
    fn exhausted_ids_report_not_saved() {
        let (mut store, _tmp) = mk_store();
        let existing = format!(
            r#"[{{"id": {}, "date": "2025-08-15", "day": "Friday", "time": "09:00 PM",
                "journal": "Last one.", "savedAt": "x"}}]"#,
            i64::MAX
        );
        fs::write(store.path(), &existing).unwrap();

        let err = store.insert(raw_entry("2025-08-16", "no room")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JournalError>(),
            Some(JournalError::NotSaved { .. })
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), existing);
    }

    #[test]
    fn persisted_file_uses_wire_field_names() {
        let (mut store, _tmp) = mk_store();
        store.insert(raw_entry("2025-08-15", "Check the file.")).unwrap();
        let s = fs::read_to_string(store.path()).unwrap();
        for key in ["\"id\"", "\"date\"", "\"day\"", "\"time\"", "\"news\"", "\"journal\"", "\"savedAt\""] {
            assert!(s.contains(key), "missing {key}");
        }
        assert!(s.contains("\"2025-08-15\""));
    }
}
