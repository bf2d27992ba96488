//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily log
//! file named `spellbee_<date>.log` in the configured log directory
//! (default: `~/.local/share/spellbee/logs/`). Nothing is installed when
//! logging is disabled, which turns every `tracing` macro into a no-op.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;

/// Install the global subscriber. Returns the log file path when enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_dir.join(format!("spellbee_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(Some(path))
}

fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}
