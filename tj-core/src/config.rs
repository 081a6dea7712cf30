use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::clock::IST_OFFSET_MINUTES;

const APP_DIR: &str = "tj";
const STORE_FILE: &str = "journal_entries.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding every entry.
    pub store_path: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// How dates are shown. Storage always uses ISO dates. Default is `%d-%m-%Y`.
    pub date_format: String,
    /// Offset of the journal's timezone from UTC. Default is 330 (IST, UTC+05:30).
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    store_path: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
    utc_offset_minutes: Option<i32>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    /// A config file that cannot be read or parsed is ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            tracing::warn!(error = ?error, "ignoring config file");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            store_path: file_config
                .store_path
                .unwrap_or_else(Self::default_store_path),
            editor: file_config.editor,
            date_format: file_config
                .date_format
                .unwrap_or_else(Self::default_date_format),
            utc_offset_minutes: file_config
                .utc_offset_minutes
                .unwrap_or(IST_OFFSET_MINUTES),
        }
    }

    pub fn default_date_format() -> String {
        "%d-%m-%Y".to_string()
    }

    /// Default store: `{data_dir}/tj/journal_entries.json`
    /// - macOS:   `~/Library/Application Support/tj`
    /// - Linux:   `$XDG_DATA_HOME/tj` or `~/.local/share/tj`
    /// - Windows: `%APPDATA%\tj`
    pub fn default_store_path() -> PathBuf {
        let dir = match BaseDirs::new() {
            Some(base) => base.data_dir().join(APP_DIR),
            None => PathBuf::from(".").join(APP_DIR),
        };
        dir.join(STORE_FILE)
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join(APP_DIR).join("config.toml"));
            v.push(b.config_dir().join(APP_DIR).join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
