pub mod clock;
pub mod config;
pub mod entry;
pub mod error;
pub mod export;
pub mod format;
pub mod journal;
pub mod query;
pub mod store;

#[cfg(test)]
mod tests;

pub use clock::{Clock, weekday_name};
pub use config::Config;
pub use entry::{Confidence, Entry, EntryId, NewEntry, RawEntry};
pub use error::JournalError;
pub use export::{ExportFormat, ExportRecord};
pub use format::format_for_display;
pub use journal::Journal;
pub use query::{DateGroup, ListFilter};
pub use store::{EntryStore, JsonFileStore, MemoryStore};
