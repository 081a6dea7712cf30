//! Wall clock pinned to a fixed UTC offset.
//!
//! Entries are always stamped in the journal's zone (Indian Standard Time by
//! default), whatever the host machine's local timezone is.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};

/// Offset of Indian Standard Time from UTC, in minutes.
pub const IST_OFFSET_MINUTES: i32 = 330;

/// Format of the `savedAt` stamp, e.g. `15-08-2025 09:30:12 PM`.
pub const SAVED_AT_FORMAT: &str = "%d-%m-%Y %I:%M:%S %p";

/// Weekday names indexed Monday-first.
const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: FixedOffset,
    pinned: Option<DateTime<FixedOffset>>,
}

impl Clock {
    /// Clock running on Indian Standard Time (UTC+05:30).
    pub fn ist() -> Self {
        Self {
            offset: ist_offset(),
            pinned: None,
        }
    }

    /// Clock running on an arbitrary offset. Offsets outside ±24h fall back to IST.
    pub fn with_offset_minutes(minutes: i32) -> Self {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                tracing::warn!(minutes, "invalid utc offset, falling back to IST");
                ist_offset()
            });
        Self {
            offset,
            pinned: None,
        }
    }

    /// A clock that always reports `instant`.
    pub fn pinned(instant: DateTime<FixedOffset>) -> Self {
        Self {
            offset: *instant.offset(),
            pinned: Some(instant),
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.pinned
            .unwrap_or_else(|| Utc::now().with_timezone(&self.offset))
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Human readable creation stamp stored in `savedAt`.
    pub fn saved_at_stamp(&self) -> String {
        let now = self.now();
        format!("{} {}", now.format(SAVED_AT_FORMAT), self.zone_label())
    }

    /// `IST` for the default zone, `+HH:MM` otherwise.
    pub fn zone_label(&self) -> String {
        if self.offset == ist_offset() {
            "IST".to_string()
        } else {
            self.offset.to_string()
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::ist()
    }
}

/// Full English weekday name for `date` (`"Monday"`..`"Sunday"`).
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// Drops seconds and sub-seconds; stored times only keep hours and minutes.
pub fn to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

fn ist_offset() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_MINUTES * 60).expect("valid offset")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn weekday_names_are_monday_first() {
        let monday = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        let friday = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
        assert_eq!(weekday_name(monday), "Monday");
        assert_eq!(weekday_name(friday), "Friday");
        assert_eq!(weekday_name(sunday), "Sunday");
    }

    #[test]
    fn ist_is_five_and_a_half_hours_ahead() {
        assert_eq!(Clock::ist().offset().local_minus_utc(), 5 * 3600 + 1800);
    }

    #[test]
    fn today_follows_the_clock_zone_not_utc() {
        // 20:00 UTC is already 01:30 the next day in IST.
        let utc = Utc.with_ymd_and_hms(2025, 8, 15, 20, 0, 0).unwrap();
        let clock = Clock::pinned(utc.with_timezone(&Clock::ist().offset()));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 8, 16).unwrap());
        assert_eq!(to_minute(clock.now().time()), NaiveTime::from_hms_opt(1, 30, 0).unwrap());
    }

    #[test]
    fn saved_at_stamp_is_twelve_hour_with_zone() {
        let instant = Clock::ist()
            .offset()
            .with_ymd_and_hms(2025, 8, 15, 21, 5, 9)
            .unwrap();
        let clock = Clock::pinned(instant);
        assert_eq!(clock.saved_at_stamp(), "15-08-2025 09:05:09 PM IST");
    }

    #[test]
    fn custom_offset_labels_with_offset() {
        let clock = Clock::with_offset_minutes(60);
        assert_eq!(clock.zone_label(), "+01:00");
    }

    #[test]
    fn out_of_range_offset_falls_back_to_ist() {
        let clock = Clock::with_offset_minutes(24 * 60);
        assert_eq!(clock.offset(), Clock::ist().offset());
    }

    #[test]
    fn to_minute_drops_seconds() {
        let t = NaiveTime::from_hms_milli_opt(9, 41, 59, 500).unwrap();
        assert_eq!(to_minute(t), NaiveTime::from_hms_opt(9, 41, 0).unwrap());
    }
}
