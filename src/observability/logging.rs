//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Wire the three sinks: console, error-only file, combined file
//! - Configure the log level from config, overridable via `RUST_LOG`
//!
//! # Design Decisions
//! - JSON format for file sinks (machine parsing), compact human format for
//!   the console
//! - Sink paths come from config; parent directories are created on init
//! - After init, emission is fire-and-forget; a failed write never reaches
//!   an HTTP response

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::ObservabilityConfig;

/// Error type for logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory {path:?}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to open log file {path:?}: {source}")]
    OpenFile {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber with console and file sinks.
///
/// `RUST_LOG` takes precedence over the configured level, so operators can
/// raise verbosity without touching the config file.
pub fn init(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let console = tracing_subscriber::fmt::layer().compact();

    let error_sink = open_sink(&config.error_log_path)?;
    let error_file = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(error_sink)
        .with_filter(LevelFilter::ERROR);

    let combined_sink = open_sink(&config.combined_log_path)?;
    let combined_file = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(combined_sink);

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(error_file)
        .with(combined_file)
        .try_init()?;

    Ok(())
}

/// Open a log file for appending, creating parent directories as needed.
fn open_sink(path: &str) -> Result<Arc<File>, LoggingError> {
    let as_path = Path::new(path);
    if let Some(parent) = as_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| LoggingError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }

    let file = File::options()
        .create(true)
        .append(true)
        .open(as_path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_string(),
            source,
        })?;

    Ok(Arc::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sink_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/error.log");
        let path = path.to_str().unwrap();

        open_sink(path).unwrap();
        assert!(Path::new(path).exists());
    }

    #[test]
    fn open_sink_reports_unwritable_locations() {
        let err = open_sink("/proc/nope/error.log").unwrap_err();
        assert!(matches!(err, LoggingError::CreateDir { .. }));
    }
}
