//! CSV and JSON downloads of the journal. Exported records never carry `id`.

use crate::entry::{Confidence, Entry, confidence_format, date_format, time_format};
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

/// Column order of the CSV export.
pub const CSV_HEADER: [&str; 7] = ["date", "day", "time", "news", "journal", "confidence", "savedAt"];

/// `as_ref()` gives the file extension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

/// An entry as it appears in an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub day: String,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
    #[serde(default)]
    pub news: String,
    #[serde(default)]
    pub journal: String,
    #[serde(
        default,
        deserialize_with = "confidence_format::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub saved_at: String,
}

impl From<&Entry> for ExportRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            date: entry.date,
            day: entry.day.clone(),
            time: entry.time,
            news: entry.news.clone(),
            journal: entry.journal.clone(),
            confidence: entry.confidence,
            saved_at: entry.saved_at.clone(),
        }
    }
}

/// Header row plus one row per entry, comma separated, `\n` terminated.
pub fn to_csv<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut out = CSV_HEADER.join(",");
    out.push('\n');
    for entry in entries {
        let date = entry.date.format(date_format::FORMAT).to_string();
        let time = entry.time.format(time_format::FORMAT).to_string();
        let confidence = entry.confidence.as_ref().map(AsRef::<str>::as_ref).unwrap_or("");
        let row = [
            date.as_str(),
            entry.day.as_str(),
            time.as_str(),
            entry.news.as_str(),
            entry.journal.as_str(),
            confidence,
            entry.saved_at.as_str(),
        ];
        let row: Vec<String> = row.iter().map(|field| csv_escape(field)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Pretty-printed JSON array of [`ExportRecord`]s.
pub fn to_json<'a, I>(entries: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let records: Vec<ExportRecord> = entries.into_iter().map(ExportRecord::from).collect();
    serde_json::to_string_pretty(&records).context("serializing export")
}

/// Reads back a JSON export.
pub fn from_json(text: &str) -> Result<Vec<ExportRecord>> {
    serde_json::from_str(text).context("parsing JSON export")
}

/// `journal_export_20250815_213000.csv`
pub fn export_file_name(now: DateTime<FixedOffset>, format: ExportFormat) -> String {
    format!(
        "journal_export_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.as_ref()
    )
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryId;
    use crate::tests::raw_entry;
    use chrono::TimeZone;

    fn entries() -> Vec<Entry> {
        let mut first = raw_entry("2025-08-15", "Sold, then \"regretted\" it.").into_entry(EntryId(2));
        first.confidence = Some(Confidence::High);
        first.news = "FOMC\nminutes".to_string();
        let second = raw_entry("2025-08-14", "Quiet.").into_entry(EntryId(1));
        vec![first, second]
    }

    #[test]
    fn csv_has_header_and_rows_without_id() {
        let csv = to_csv(&entries());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("date,day,time,news,journal,confidence,savedAt"));
        assert_eq!(
            csv.lines().last(),
            Some("2025-08-14,Thursday,09:00 PM,,Quiet.,,15-08-2025 09:00:00 PM IST")
        );
    }

    #[test]
    fn csv_quotes_fields_with_separators() {
        let csv = to_csv(&entries());
        assert!(csv.contains("\"Sold, then \"\"regretted\"\" it.\""));
        assert!(csv.contains("\"FOMC\nminutes\""));
        assert!(csv.contains(",High,"));
    }

    #[test]
    fn json_import_reads_blank_confidence_as_unset() {
        let text = r#"[{"date": "2025-08-15", "day": "Friday", "time": "09:00 PM",
                        "journal": "Skipped.", "confidence": "", "savedAt": "x"}]"#;
        let records = from_json(text).unwrap();
        assert_eq!(records[0].confidence, None);
    }

    #[test]
    fn csv_of_nothing_is_just_the_header() {
        assert_eq!(to_csv(&Vec::<Entry>::new()), "date,day,time,news,journal,confidence,savedAt\n");
    }

    #[test]
    fn json_round_trip_matches_entries_without_id() {
        let entries = entries();
        let json = to_json(&entries).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\n  {"));

        let parsed = from_json(&json).unwrap();
        let expected: Vec<ExportRecord> = entries.iter().map(ExportRecord::from).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn export_file_name_uses_timestamp_and_extension() {
        let now = FixedOffset::east_opt(19800)
            .unwrap()
            .with_ymd_and_hms(2025, 8, 15, 21, 30, 0)
            .unwrap();
        assert_eq!(
            export_file_name(now, ExportFormat::Csv),
            "journal_export_20250815_213000.csv"
        );
        assert_eq!(
            export_file_name(now, ExportFormat::Json),
            "journal_export_20250815_213000.json"
        );
    }
}
