use super::theme::Palette;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};
use tj_core::{
    Entry,
    entry::time_format,
    format::{format_date, format_for_display, split_sentences},
};

/// Cashtags such as `$TSLA` or `$BRK.B`.
static TICKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\s)\$([A-Za-z](?:[A-Za-z0-9.]*[A-Za-z0-9])?)").expect("valid ticker regex"));

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
    /// Show journal text one sentence per line.
    pub sentence_lines: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Palette::journal_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%d-%m-%Y".to_string(),
                    use_color: true,
                    short_mode: false,
                    sentence_lines: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        if self.opts.use_color {
            self.print_md(&md);
        } else {
            println!("{}", message);
        }
    }

    /// `15-08-2025 Friday 09:05 PM [#id] - first sentence`
    pub fn print_entry_line(&self, entry: &Entry) {
        let mut date = format!("{} {}", self.date(entry.date), entry.day);
        let mut time = entry.time.format(time_format::FORMAT).to_string();
        let mut id = format!("[#{}]", entry.id);
        let mut summary = summary(entry).to_string();
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            time = time.with(Color::Blue).to_string();
            id = id.with(Color::DarkGrey).to_string();
            summary = summary.with(Color::Yellow).to_string();
        }
        println!("{} {} {} - {}", date, time, id, summary);
    }

    pub fn print_entries(&self, entries: &[Entry]) {
        for (i, entry) in entries.iter().enumerate() {
            if self.opts.short_mode {
                self.print_entry_line(entry);
                continue;
            }
            let heading = format!(
                "## {} {} {}",
                self.date(entry.date),
                entry.day,
                entry.time.format(time_format::FORMAT)
            );
            self.print_block(&heading, entry);
            if i + 1 < entries.len() {
                println!();
            }
        }
    }

    /// One `#` heading per date, entries under it.
    pub fn print_groups(&self, groups: &[(NaiveDate, Vec<Entry>)]) {
        for (date, entries) in groups {
            let day = entries.first().map(|e| e.day.as_str()).unwrap_or_default();
            let heading = format!("# {} ({})", self.date(*date), day);
            if self.opts.use_color {
                self.print_md(&heading);
            } else {
                println!("{heading}");
            }
            for entry in entries {
                if self.opts.short_mode {
                    self.print_entry_line(entry);
                    continue;
                }
                let heading = format!("## {}", entry.time.format(time_format::FORMAT));
                self.print_block(&heading, entry);
            }
            println!();
        }
    }

    pub fn print_dates(&self, dates: &BTreeSet<NaiveDate>) {
        for date in dates.iter().rev() {
            let mut line = self.date(*date);
            if self.opts.use_color {
                line = line.with(Color::Cyan).to_string();
            }
            println!("{line}");
        }
    }

    fn print_block(&self, heading: &str, entry: &Entry) {
        let md = self.entry_markdown(heading, entry);
        if self.opts.use_color {
            self.print_md(&md);
            self.print_md("---");
        } else {
            print!("{md}");
            println!("---");
        }
    }

    fn entry_markdown(&self, heading: &str, entry: &Entry) -> String {
        let mut md = format!("{heading} *#{}*\n", entry.id);
        if !entry.news.trim().is_empty() {
            md.push_str(&format!("**News:** {}\n", entry.news.trim()));
        }
        if let Some(confidence) = entry.confidence {
            md.push_str(&format!("**Confidence:** {}\n", confidence.as_ref()));
        }
        if !entry.journal.trim().is_empty() {
            let body = if self.opts.sentence_lines {
                format_for_display(&entry.journal)
            } else {
                entry.journal.trim_end().to_string()
            };
            md.push_str(&highlight_tickers(&body));
            md.push('\n');
        }
        md
    }

    fn date(&self, date: NaiveDate) -> String {
        format_date(date, &self.opts.date_format)
    }
}

/// First sentence of the journal, or the news when there is no journal text.
fn summary(entry: &Entry) -> &str {
    split_sentences(&entry.journal)
        .first()
        .copied()
        .unwrap_or_else(|| entry.news.trim())
}

fn highlight_tickers(body: &str) -> String {
    TICKER.replace_all(body, "$1`$$$2`").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use tj_core::EntryId;

    fn plain() -> Renderer {
        Renderer::new(Some(RenderOptions {
            date_format: "%d-%m-%Y".to_string(),
            use_color: false,
            short_mode: false,
            sentence_lines: true,
        }))
    }

    fn entry(news: &str, journal: &str) -> Entry {
        Entry {
            id: EntryId(42),
            date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            day: "Friday".to_string(),
            time: NaiveTime::from_hms_opt(21, 5, 0).unwrap(),
            news: news.to_string(),
            journal: journal.to_string(),
            confidence: None,
            saved_at: "15-08-2025 09:05:09 PM IST".to_string(),
        }
    }

    #[test]
    fn tickers_become_inline_code() {
        assert_eq!(
            highlight_tickers("Bought $TSLA and $BRK.B. Sold $F. Cost $5 though."),
            "Bought `$TSLA` and `$BRK.B`. Sold `$F`. Cost $5 though."
        );
    }

    #[test]
    fn summary_prefers_first_sentence() {
        assert_eq!(summary(&entry("Fed", "Held. Then sold.")), "Held.");
        assert_eq!(summary(&entry(" Fed speaks ", "")), "Fed speaks");
    }

    #[test]
    fn markdown_lists_news_and_sentences() {
        let md = plain().entry_markdown("## heading", &entry("CPI hot", "Faded it. Worked!"));
        assert_eq!(md, "## heading *#42*\n**News:** CPI hot\nFaded it.\nWorked!\n");
    }

    #[test]
    fn raw_mode_keeps_text_as_written() {
        let mut r = plain();
        r.opts.sentence_lines = false;
        let md = r.entry_markdown("## h", &entry("", "Faded it. Worked!"));
        assert_eq!(md, "## h *#42*\nFaded it. Worked!\n");
    }
}
