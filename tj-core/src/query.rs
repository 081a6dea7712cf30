//! Read-side helpers over a loaded entry collection. All of them keep the
//! collection's own order (most recent insert first).

use crate::entry::Entry;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Size of the "last 7 days" view.
pub const LAST_7_DAYS_LIMIT: usize = 20;
/// Size of the "last 30 days" view.
pub const LAST_30_DAYS_LIMIT: usize = 50;

/// Which slice of the journal to show.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListFilter {
    All,
    /// Entries dated today in the journal's zone.
    Today,
    Last7Days,
    Last30Days,
    /// The `n` most recent inserts.
    Latest(usize),
}

/// Entries sharing one `date`.
#[derive(Clone, Debug, PartialEq)]
pub struct DateGroup<'a> {
    pub date: NaiveDate,
    pub entries: Vec<&'a Entry>,
}

pub fn entries_for_date<'a, I>(entries: I, date: NaiveDate) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().filter(|e| e.date == date).collect()
}

/// Partitions entries by `date`.
///
/// Groups come out in the order their date is first seen while scanning
/// `entries`, not in calendar order; entries inside a group keep their order.
pub fn group_by_date<'a, I>(entries: I) -> Vec<DateGroup<'a>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut groups: Vec<DateGroup<'a>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    for entry in entries {
        match index.get(&entry.date) {
            Some(&i) => groups[i].entries.push(entry),
            None => {
                index.insert(entry.date, groups.len());
                groups.push(DateGroup {
                    date: entry.date,
                    entries: vec![entry],
                });
            }
        }
    }
    groups
}

pub fn distinct_dates<'a, I>(entries: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().map(|e| e.date).collect()
}

/// Applies `filter`; `today` anchors [`ListFilter::Today`].
pub fn apply_filter(entries: &[Entry], filter: ListFilter, today: NaiveDate) -> Vec<&Entry> {
    match filter {
        ListFilter::All => entries.iter().collect(),
        ListFilter::Today => entries_for_date(entries, today),
        // Fixed-size prefixes of the newest inserts, not calendar windows.
        ListFilter::Last7Days => entries.iter().take(LAST_7_DAYS_LIMIT).collect(),
        ListFilter::Last30Days => entries.iter().take(LAST_30_DAYS_LIMIT).collect(),
        ListFilter::Latest(n) => entries.iter().take(n).collect(),
    }
}
