//! Display helpers. Nothing here touches what gets persisted.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator placed between sentences by [`format_for_display`].
pub const LINE_BREAK: &str = "\n";

/// A run of terminal punctuation closing a sentence: followed by whitespace or the end of text.
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("valid sentence regex"));

/// Splits `text` into trimmed sentences, keeping each sentence's punctuation.
///
/// `...` and `?!` count as a single delimiter, and punctuation inside a token
/// (`3.5`, `BRK.B`) does not split. A trailing fragment without punctuation is
/// returned as its own sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = m.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// One sentence per line, for rendering journal notes.
///
/// ```
/// # use tj_core::format::format_for_display;
/// assert_eq!(
///     format_for_display("Bought TSLA. Sold too early!"),
///     "Bought TSLA.\nSold too early!"
/// );
/// ```
pub fn format_for_display(text: &str) -> String {
    format_with_break(text, LINE_BREAK)
}

/// Same as [`format_for_display`] with a renderer specific marker (e.g. `<br>`).
pub fn format_with_break(text: &str, marker: &str) -> String {
    split_sentences(text).join(marker)
}

/// Formats a date according to the user's configuration.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}
