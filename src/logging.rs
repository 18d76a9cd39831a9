//! Logging Setup
//!
//! Host applications embedding the engine call [`init`] once at startup.
//! Sets up a pretty stdout layer plus a JSON file layer (daily rolling) and
//! bridges the standard `log` macros used throughout the crate into
//! `tracing`.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging system.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application so buffered file logs are flushed on shutdown.
pub fn init() -> WorkerGuard {
    let log_dir = dirs::data_dir()
        .map(|d| d.join("autoform").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "autoform.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer: JSON for easy parsing.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter.clone());

    // Stdout layer: human-readable.
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .pretty()
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .init();

    // Redirect standard `log` macros to `tracing`.
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join("autoform.log")
    );

    guard
}
