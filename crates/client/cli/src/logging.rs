//! Logging setup: stderr always, plus an optional log file.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;
use crate::dirs;

/// Installs the global subscriber.
///
/// Returns the file writer guard when file logging is enabled; dropping it
/// flushes and closes the log.
pub fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Stdout carries results, so diagnostics go to stderr
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let log_dir = match (&config.log_dir, config.log_to_file) {
        (Some(dir), _) => Some(dir.clone()),
        (None, true) => Some(dirs::log_dir()),
        (None, false) => None,
    };

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "loadout.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/loadout.log", log_dir.display());

    Ok(Some(guard))
}
