//! Stderr logging using env_logger
//!
//! `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` with
//! `--verbose`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize logging. Safe to call once per process.
pub fn init(verbose: bool) {
    let default = default_level(verbose).to_string().to_lowercase();
    let env = Env::default().default_filter_or(default);

    if let Err(e) = Builder::from_env(env).format_timestamp(None).try_init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
