use anyhow::Result;
use chrono::{Days, NaiveDate, NaiveTime};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tj_core::{
    Confidence, EntryId, ExportFormat, JournalError, ListFilter,
    entry::{date_format, time_format},
};

use crate::render::ColorMode;

/// tj: a trading journal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Use this journal file instead of the configured one.
    #[arg(long, global = true, env = "TJ_STORE")]
    pub store: Option<PathBuf>,
    /// Defaults to `list`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new entry (e.g. `tj add --news "CPI hot" Faded the open. Stopped out.`)
    Add(AddArgs),
    /// Show saved entries, newest first
    List(ListArgs),
    /// Print every date that has entries
    Dates,
    /// Delete an entry by id
    Delete {
        /// Id shown next to each entry in `tj list`
        id: EntryId,
    },
    /// Export all entries to CSV or JSON
    Export(ExportArgs),
    /// Print the journal file location
    Path,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Entry date: `today`, `yesterday`, `2025-08-15` or `15-08-2025`. Defaults to today.
    #[arg(long, short)]
    pub date: Option<String>,
    /// Entry time, e.g. `14:30` or `2:30 PM`. Defaults to now.
    #[arg(long, short, value_parser = parse_time_arg)]
    pub time: Option<NaiveTime>,
    /// Market news that moved you today
    #[arg(long, short)]
    pub news: Option<String>,
    /// How confident you were: low, medium or high
    #[arg(long, short, value_parser = parse_confidence_arg)]
    pub confidence: Option<Confidence>,
    /// Journal text. Your $EDITOR opens when both this and --news are empty.
    pub text: Vec<String>,
}

#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("range").args(["today", "week", "month", "latest", "on"])))]
pub struct ListArgs {
    /// Only entries dated today
    #[arg(long)]
    pub today: bool,
    /// The "last 7 days" view: the 20 most recent entries
    #[arg(long)]
    pub week: bool,
    /// The "last 30 days" view: the 50 most recent entries
    #[arg(long)]
    pub month: bool,
    /// The N most recent entries
    #[arg(long, value_name = "N")]
    pub latest: Option<usize>,
    /// Entries on a specific date (e.g. `yesterday`, `2025-08-15`)
    #[arg(long)]
    pub on: Option<String>,
    /// Show entries under a heading per date
    #[arg(long, short)]
    pub grouped: bool,
    /// Print journal text as written instead of one sentence per line
    #[arg(long)]
    pub raw: bool,
    /// Only one line per entry
    #[arg(long, short)]
    pub short: bool,
}

impl ListArgs {
    pub fn filter(&self) -> ListFilter {
        if self.today {
            ListFilter::Today
        } else if self.week {
            ListFilter::Last7Days
        } else if self.month {
            ListFilter::Last30Days
        } else if let Some(n) = self.latest {
            ListFilter::Latest(n)
        } else {
            ListFilter::All
        }
    }
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub format: ExportKind,
    /// Output file. Defaults to `journal_export_<timestamp>.<ext>` in the current directory.
    #[arg(long, short, conflicts_with = "stdout")]
    pub out: Option<PathBuf>,
    /// Print the export instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ExportKind {
    Csv,
    Json,
}

impl From<ExportKind> for ExportFormat {
    fn from(kind: ExportKind) -> Self {
        match kind {
            ExportKind::Csv => ExportFormat::Csv,
            ExportKind::Json => ExportFormat::Json,
        }
    }
}

/// Resolves `today`, `yesterday`, ISO and day-month-year dates, then the
/// configured display format.
pub fn resolve_date(input: &str, today: NaiveDate, display_format: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let date = match trimmed.to_ascii_lowercase().as_str() {
        "today" => Some(today),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        _ => date_format::parse(trimmed)
            .or_else(|| NaiveDate::parse_from_str(trimmed, display_format).ok()),
    };
    date.ok_or_else(|| {
        JournalError::InvalidInput {
            input: input.to_string(),
            error: "Not a valid date or keyword.".to_string(),
        }
        .into()
    })
}

fn parse_time_arg(input: &str) -> Result<NaiveTime, String> {
    time_format::parse(input)
        .ok_or_else(|| format!("'{input}' is not a valid time (try 14:30 or 2:30 PM)"))
}

fn parse_confidence_arg(input: &str) -> Result<Confidence, String> {
    match Confidence::parse_optional(input) {
        Ok(Some(level)) => Ok(level),
        _ => Err(format!(
            "expected one of: {}",
            Confidence::choices().join(", ")
        )),
    }
}
