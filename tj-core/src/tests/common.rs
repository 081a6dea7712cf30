use crate::{Clock, Config, Journal, RawEntry, weekday_name};
use chrono::{NaiveDate, NaiveTime, TimeZone};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(store_path: PathBuf) -> Config {
    Config {
        store_path,
        editor: None,
        date_format: "%d-%m-%Y".to_string(),
        utc_offset_minutes: 330,
    }
}

/// Friday 15 Aug 2025, 21:05:09 IST.
pub fn pinned_clock() -> Clock {
    let instant = Clock::ist()
        .offset()
        .with_ymd_and_hms(2025, 8, 15, 21, 5, 9)
        .unwrap();
    Clock::pinned(instant)
}

/// A file-backed journal in a fresh temp dir, on the pinned clock.
pub fn mk_journal() -> (Journal, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = mk_config(tmp.path().join("tj").join("journal_entries.json"));
    let mut journal = Journal::with_config(config).expect("journal with config");
    journal.clock = pinned_clock();
    (journal, tmp)
}

/// A raw entry for an ISO `date`, written at 21:00.
pub fn raw_entry(date: &str, journal: &str) -> RawEntry {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    RawEntry {
        date,
        day: weekday_name(date).to_string(),
        time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        news: String::new(),
        journal: journal.to_string(),
        confidence: None,
        saved_at: "15-08-2025 09:00:00 PM IST".to_string(),
    }
}
