use crate::paths;
use std::path::{Path, PathBuf};

/// Config file locations in lookup order
///
/// 1. `.review-diff.toml` in the current working directory
/// 2. `review-diff/config.toml` in the platform config directory
/// 3. `.review-diff.toml` in the home directory
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    candidates.push(
        paths::local_config_path().unwrap_or_else(|_| PathBuf::from(paths::LOCAL_CONFIG_FILE)),
    );
    if let Ok(path) = paths::app_config_path() {
        candidates.push(path);
    }
    if let Some(path) = paths::home_config_path() {
        candidates.push(path);
    }
    candidates
}

/// Load the content of the first config file found
///
/// Returns the path and content if found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    read_first(&config_candidates())
}

/// Read the first of `candidates` that exists and is readable
pub fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<(PathBuf, String)> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some((path.to_path_buf(), content))
        }
        Err(_) => None,
    }
}
