//! Tracing setup for the terminal binary.
//!
//! The terminal is owned by the game, so log lines go to a file instead of
//! stderr. The filter comes from `Config::log_level` (`QUIZ_LOG`).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::Config;

/// Install the global subscriber. Returns the log file path.
///
/// Only the first call installs a subscriber; later calls still open the
/// file but leave the existing subscriber in place.
pub fn init_logging(config: &Config) -> Result<PathBuf> {
    let path = config.log_path();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    tracing::info!(log = %path.display(), "logging initialized");
    Ok(path)
}
