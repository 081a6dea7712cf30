use anyhow::{Context, Result, bail};
use std::{fs, io::Write, path::Path, process::Command};

const BUFFER_HINT: &str = "# Write today's journal notes below. This line is removed on save.\n";

pub fn resolve_editor(editor: &Option<String>) -> String {
    editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens `editor_cmd` on a scratch file and returns what was written, minus hint lines.
pub fn create_editor_buffer(editor_cmd: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("tj")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(BUFFER_HINT.as_bytes())?;
    file.flush()?;

    open_file_in_editor(editor_cmd, file.path())?;
    let content = fs::read_to_string(file.path())
        .with_context(|| format!("reading {}", file.path().display()))?;
    Ok(strip_hint(&content))
}

/// `editor_cmd` may carry arguments, e.g. `code --wait`.
pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let mut parts = editor_cmd.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("No editor configured");
    };
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("launching editor '{editor_cmd}'"))?;
    if !status.success() {
        bail!("Editor exited with status {}", status);
    }
    Ok(())
}

/// Drops the hint line only; anything else the user wrote is kept.
fn strip_hint(content: &str) -> String {
    let hint = BUFFER_HINT.trim_end();
    content
        .lines()
        .filter(|line| line.trim_end() != hint)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
