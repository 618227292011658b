//! Configuration for review-diff
//!
//! This crate provides:
//! - Config file lookup (CWD, platform config dir, home directory)
//! - Application configuration (ReviewDiffConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::ReviewDiffConfig;
pub use config_file::{config_candidates, load_config_file};
