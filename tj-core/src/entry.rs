use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};
use strum::VariantNames;
use strum_macros::{AsRefStr, EnumString, VariantNames};

/// Opaque entry identifier. Only ever compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntryId)
    }
}

/// How confident the trader felt about the setup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, VariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Every selectable level, lowest first.
    pub fn choices() -> &'static [&'static str] {
        Self::VARIANTS
    }

    /// Parses a user selection; an empty selection means "not set".
    pub fn parse_optional(input: &str) -> Result<Option<Self>, strum::ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        input.parse().map(Some)
    }
}

/// A persisted journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    /// Weekday of `date`, captured when the entry was written.
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

/// A fully built record waiting for the store to give it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub date: NaiveDate,
    pub day: String,
    pub time: NaiveTime,
    pub news: String,
    pub journal: String,
    pub confidence: Option<Confidence>,
    pub saved_at: String,
}

impl RawEntry {
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            date: self.date,
            day: self.day,
            time: self.time,
            news: self.news,
            journal: self.journal,
            confidence: self.confidence,
            saved_at: self.saved_at,
        }
    }
}

/// Fields as submitted by the user. Missing date/time default to "now".
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub news: String,
    pub journal: String,
    pub confidence: Option<Confidence>,
}

impl NewEntry {
    /// True when there is nothing worth saving.
    pub fn is_empty(&self) -> bool {
        self.news.trim().is_empty() && self.journal.trim().is_empty()
    }
}

/// `date` is stored ISO-normalised; grouping and comparison never use a display string.
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d";
    /// Day-month-year, as written by older journal files.
    pub const LEGACY_FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, LEGACY_FORMAT))
            .ok()
    }
}

/// `time` is stored as 12-hour clock text, e.g. `09:15 AM`.
pub mod time_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%I:%M %p";
    const ACCEPTED: [&str; 4] = [FORMAT, "%I:%M%p", "%H:%M:%S", "%H:%M"];

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid time '{raw}'")))
    }

    pub fn parse(raw: &str) -> Option<NaiveTime> {
        let raw = raw.trim();
        ACCEPTED
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
    }
}

/// An unselected confidence may be stored as `""`; it reads back as `None`.
pub mod confidence_format {
    use super::Confidence;
    use serde::{Deserialize, Deserializer, de::Error};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Confidence>, D::Error> {
        let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
        Confidence::parse_optional(&raw)
            .map_err(|_| D::Error::custom(format!("invalid confidence '{raw}'")))
    }
}
