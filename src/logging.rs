//! Logging setup
//!
//! Diagnostics go through `tracing`. The filter comes from `RENTBOARD_LOG`
//! (default `warn`). Output goes to stderr, except while the TUI owns the
//! terminal, when it is appended to the log file instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

use crate::error::{RentboardError, RentboardResult};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "RENTBOARD_LOG";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to a file, appending
pub fn init_file(path: &Path) -> RentboardResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| RentboardError::Io(format!("Failed to open log file: {}", e)))?;

    let _ = tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
