//! Tracing setup
//!
//! The TUI owns the terminal, so the viewer logs to a daily rolling file.
//! Headless runs print JSON on stdout and log to stderr instead. Both read
//! their filter from `LOGDETAIL_LOG`:
//!
//! ```bash
//! LOGDETAIL_LOG=debug logdetail app.json
//! LOGDETAIL_LOG=logdetail_app=trace logdetail --headless app.json
//! ```

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

pub const LOG_ENV_VAR: &str = "LOGDETAIL_LOG";

const DEFAULT_FILTER: &str = "logdetail=info,warn";
const LOG_FILE_PREFIX: &str = "logdetail.log";

/// Log to `<data_local_dir>/logdetail/logs/logdetail.log.<date>`
pub fn init() -> Result<()> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();

    tracing::info!("──────── logdetail {} ────────", env!("CARGO_PKG_VERSION"));
    tracing::info!("Writing logs to {}", dir.display());
    Ok(())
}

/// Log compactly to stderr
pub fn init_stderr() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Directory holding the rolling log files
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logdetail")
        .join("logs")
}
