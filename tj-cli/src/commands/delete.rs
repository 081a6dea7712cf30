use crate::render::Renderer;
use anyhow::Result;
use tj_core::{EntryId, Journal};

pub fn run(journal: &mut Journal, renderer: &Renderer, id: EntryId) -> Result<()> {
    if !journal.entries().iter().any(|e| e.id == id) {
        renderer.print_info(&format!("No entry with id {id}."));
        return Ok(());
    }
    journal.delete(id)?;
    renderer.print_info(&format!("Deleted entry {id}."));
    Ok(())
}
