//! The `Journal` facade: everything a front end needs to submit, list,
//! delete and export entries.

use crate::clock::{Clock, to_minute, weekday_name};
use crate::config::Config;
use crate::entry::{Entry, EntryId, NewEntry, RawEntry};
use crate::error::JournalError;
use crate::export::{self, ExportFormat};
use crate::query::{ListFilter, apply_filter, distinct_dates, group_by_date};
use crate::store::{EntryStore, JsonFileStore};
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// The central struct for all journal operations.
///
/// Holds the configuration, the clock used to stamp entries and the store
/// they are persisted to.
#[derive(Debug)]
pub struct Journal<S: EntryStore = JsonFileStore> {
    pub config: Config,
    pub clock: Clock,
    store: S,
}

impl Journal<JsonFileStore> {
    /// Creates a new `Journal`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Journal` backed by the JSON file named in `config`.
    ///
    /// The store file (and its directory) is created if missing.
    pub fn with_config(config: Config) -> Result<Self> {
        let store = JsonFileStore::open(&config.store_path)?;
        let clock = Clock::with_offset_minutes(config.utc_offset_minutes);
        Ok(Self::with_store(config, clock, store))
    }
}

impl<S: EntryStore> Journal<S> {
    pub fn with_store(config: Config, clock: Clock, store: S) -> Self {
        Self {
            config,
            clock,
            store,
        }
    }

    /// Builds an entry from user input and saves it at the head of the journal.
    ///
    /// - Date and time default to now in the journal's zone.
    /// - `day` is derived from the date once, here.
    /// - Input with neither news nor journal text is rejected with
    ///   [`JournalError::EmptySubmission`] before the store is touched.
    pub fn submit(&mut self, input: NewEntry) -> Result<Entry> {
        if input.is_empty() {
            return Err(JournalError::EmptySubmission.into());
        }
        let now = self.clock.now();
        let date = input.date.unwrap_or_else(|| now.date_naive());
        let time = to_minute(input.time.unwrap_or_else(|| now.time()));
        let raw = RawEntry {
            date,
            day: weekday_name(date).to_string(),
            time,
            news: input.news,
            journal: input.journal,
            confidence: input.confidence,
            saved_at: self.clock.saved_at_stamp(),
        };
        self.store.insert(raw)
    }

    /// Every entry, most recent first.
    pub fn entries(&self) -> Vec<Entry> {
        self.store.load_all()
    }

    pub fn list(&self, filter: ListFilter) -> Vec<Entry> {
        let all = self.store.load_all();
        apply_filter(&all, filter, self.clock.today())
            .into_iter()
            .cloned()
            .collect()
    }

    /// `list` partitioned by date, in first-seen order.
    pub fn grouped(&self, filter: ListFilter) -> Vec<(NaiveDate, Vec<Entry>)> {
        let entries = self.list(filter);
        group_by_date(&entries)
            .into_iter()
            .map(|g| (g.date, g.entries.into_iter().cloned().collect()))
            .collect()
    }

    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        distinct_dates(&self.store.load_all())
    }

    /// Deleting an id that is not there is fine.
    pub fn delete(&mut self, id: EntryId) -> Result<()> {
        self.store.delete_by_id(id)
    }

    pub fn export_csv(&self) -> String {
        export::to_csv(&self.store.load_all())
    }

    pub fn export_json(&self) -> Result<String> {
        export::to_json(&self.store.load_all())
    }

    pub fn export(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => Ok(self.export_csv()),
            ExportFormat::Json => self.export_json(),
        }
    }

    pub fn export_file_name(&self, format: ExportFormat) -> String {
        export::export_file_name(self.clock.now(), format)
    }
}
