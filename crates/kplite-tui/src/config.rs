//! Configuration file handling.
//!
//! Reads from `~/.config/kplite/kplite.toml`. Every key is optional and a
//! missing file means defaults; the file is never written.

use anyhow::{Context, Result};
use kplite_core::navigation::{Options, DEFAULT_SEARCH_MAX_LEN};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Width of the group pane, in percent of the terminal.
    pub group_pane_percent: u16,
    /// Whether passwords start out visible.
    pub show_passwords: bool,
    /// Maximum number of characters in a search query.
    pub search_max_len: usize,
    /// Group names to hide from the tree, e.g. "Recycle Bin".
    pub hidden_groups: Vec<String>,
    /// Log level for kplite's own crates.
    pub log_level: String,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_pane_percent: 33,
            show_passwords: false,
            search_max_len: DEFAULT_SEARCH_MAX_LEN,
            hidden_groups: Vec::new(),
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load the configuration from the default location.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the configuration from `path`, falling back to defaults if the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.group_pane_percent = self.group_pane_percent.clamp(10, 90);
        self.search_max_len = self.search_max_len.max(1);
        self
    }

    /// Navigation settings derived from the config.
    pub fn options(&self) -> Options {
        Options {
            show_passwords: self.show_passwords,
            search_max_len: self.search_max_len,
        }
    }

    /// Path to the config file, if a config directory is known.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kplite").join("kplite.toml"))
    }
}
