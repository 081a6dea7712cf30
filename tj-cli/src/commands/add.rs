use crate::{
    cli::{AddArgs, resolve_date},
    editor_utils::{create_editor_buffer, resolve_editor},
    render::Renderer,
};
use anyhow::Result;
use tj_core::{Journal, NewEntry};

pub fn run(journal: &mut Journal, renderer: &Renderer, args: AddArgs) -> Result<()> {
    let date = args
        .date
        .as_deref()
        .map(|d| resolve_date(d, journal.clock.today(), &journal.config.date_format))
        .transpose()?;

    let mut text = args.text.join(" ");
    let news = args.news.unwrap_or_default();
    if text.trim().is_empty() && news.trim().is_empty() {
        let editor = resolve_editor(&journal.config.editor);
        tracing::debug!(%editor, "opening editor for entry text");
        text = create_editor_buffer(&editor)?;
    }

    let input = NewEntry {
        date,
        time: args.time,
        news,
        journal: text,
        confidence: args.confidence,
    };
    if input.is_empty() {
        renderer.print_info("No entry to save, because no text was received.");
        return Ok(());
    }

    let entry = journal.submit(input)?;
    renderer.print_info(&format!(
        "Journal entry saved to {}",
        journal.config.store_path.display()
    ));
    renderer.print_entry_line(&entry);
    Ok(())
}
