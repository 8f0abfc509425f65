//! Logging Setup
//!
//! Console output plus a daily rolling file in the data directory. When the
//! data directory is unusable the app keeps running with console logging.

use crate::constants::LOG_FILE_PREFIX;
use crate::error::Result;
use crate::helpers::{get_or_create_data_dir, is_development};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Console and a rolling file in this directory
    File(PathBuf),
    /// Console only; carries the reason the file could not be used
    ConsoleOnly(String),
}

impl LogTarget {
    pub fn from_dir(dir: Result<PathBuf>) -> Self {
        match dir {
            Ok(dir) => LogTarget::File(dir),
            Err(e) => LogTarget::ConsoleOnly(e.to_string()),
        }
    }
}

fn env_filter() -> EnvFilter {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    EnvFilter::from_default_env().add_directive(level.into())
}

/// Install the global subscriber
///
/// Keep the returned guard alive for the process lifetime so buffered file
/// output is flushed.
pub fn init_logging() -> Option<WorkerGuard> {
    match LogTarget::from_dir(get_or_create_data_dir()) {
        LogTarget::File(log_dir) => {
            let (file_writer, guard) = tracing_appender::non_blocking(
                tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX),
            );
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer())
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_timer(LocalTime::rfc_3339())
                        .with_writer(file_writer),
                )
                .init();
            tracing::info!(log_dir = ?log_dir, "File logging enabled");
            Some(guard)
        }
        LogTarget::ConsoleOnly(reason) => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer())
                .init();
            tracing::warn!(error = %reason, "Log directory unavailable, logging to console only");
            None
        }
    }
}
