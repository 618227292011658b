//! Application configuration
//!
//! Configuration loaded from `.review-diff.toml` or `review-diff/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReviewDiffConfig {
    /// Lines shown for a single-line comment, the commented line included
    #[serde(default = "default_context_window")]
    pub context_window: usize,

    /// Minimum width of each line number column
    #[serde(default = "default_min_line_number_width")]
    pub min_line_number_width: usize,

    /// Render `diff`, `---` and `+++` rows
    #[serde(default = "default_true")]
    pub show_file_headers: bool,

    /// Render `@@` rows
    #[serde(default = "default_true")]
    pub show_hunk_headers: bool,
}

fn default_context_window() -> usize {
    5
}

fn default_min_line_number_width() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for ReviewDiffConfig {
    fn default() -> Self {
        Self {
            context_window: default_context_window(),
            min_line_number_width: default_min_line_number_width(),
            show_file_headers: default_true(),
            show_hunk_headers: default_true(),
        }
    }
}

impl ReviewDiffConfig {
    /// Load config from CWD first, then the config directory, then the home
    /// directory, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path. Unlike [`load`](Self::load), a
    /// missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
