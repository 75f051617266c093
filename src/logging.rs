//! File-backed tracing setup. The TUI owns the terminal, so log records go to
//! a plain-text file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, appending plain-text records to `log_path`.
/// `RUST_LOG` controls the filter and defaults to `info`.
pub fn init(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
