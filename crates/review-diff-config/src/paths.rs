//! Configuration file paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/review-diff/config.toml`
//! - macOS: `~/Library/Application Support/review-diff/config.toml`
//! - Windows: `%APPDATA%\review-diff\config.toml`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "review-diff";
pub(crate) const LOCAL_CONFIG_FILE: &str = ".review-diff.toml";

/// Get the application config directory. Does not create it.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to the app config file in the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get path to the local config file (in CWD)
pub fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_CONFIG_FILE))
}

/// Get path to the dotfile in the home directory
pub fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(LOCAL_CONFIG_FILE))
}
