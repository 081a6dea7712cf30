use crate::{cli::ExportArgs, render::Renderer};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use tj_core::{ExportFormat, Journal};

pub fn run(journal: &Journal, renderer: &Renderer, args: ExportArgs) -> Result<()> {
    let format = ExportFormat::from(args.format);
    let content = journal.export(format)?;
    if args.stdout {
        print!("{content}");
        return Ok(());
    }

    let path = args
        .out
        .unwrap_or_else(|| PathBuf::from(journal.export_file_name(format)));
    fs::write(&path, &content).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), ?format, "exported journal");
    renderer.print_info(&format!(
        "Exported {} entries to {}",
        journal.entries().len(),
        path.display()
    ));
    Ok(())
}
