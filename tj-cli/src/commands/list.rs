use crate::{
    cli::{ListArgs, resolve_date},
    render::Renderer,
};
use anyhow::Result;
use tj_core::{Entry, Journal, query};

pub fn run(journal: &Journal, renderer: &Renderer, args: &ListArgs) -> Result<()> {
    let on = args
        .on
        .as_deref()
        .map(|on| resolve_date(on, journal.clock.today(), &journal.config.date_format))
        .transpose()?;
    let entries: Vec<Entry> = match on {
        Some(date) => query::entries_for_date(&journal.entries(), date)
            .into_iter()
            .cloned()
            .collect(),
        None => journal.list(args.filter()),
    };

    if entries.is_empty() {
        renderer.print_info("No entries found.");
        return Ok(());
    }

    if args.grouped {
        let groups = match on {
            Some(date) => vec![(date, entries)],
            None => journal.grouped(args.filter()),
        };
        renderer.print_groups(&groups);
    } else {
        renderer.print_entries(&entries);
    }
    Ok(())
}

pub fn dates(journal: &Journal, renderer: &Renderer) -> Result<()> {
    let dates = journal.dates();
    if dates.is_empty() {
        renderer.print_info("No entries found.");
        return Ok(());
    }
    renderer.print_dates(&dates);
    Ok(())
}
