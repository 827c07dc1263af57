//! Logging setup
//!
//! Library code logs through the `log` facade. [`init`] installs a `fern`
//! dispatcher that writes to a log file and, when given one, mirrors every
//! record into a bounded in-memory [`Logger`] buffer.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_BUFFER_CAPACITY, LOG_BUFFER_TIMESTAMP_FORMAT, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared in-memory log buffer holding at most `capacity` entries
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    /// Buffer with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    /// Buffer keeping the newest `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(LOG_BUFFER_CAPACITY)))),
            capacity,
        }
    }

    /// Maximum number of entries kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add a log entry, dropping the oldest one when full
    pub fn log(&self, message: String) {
        if self.capacity == 0 {
            return;
        }
        let timestamp = Utc::now().format(LOG_BUFFER_TIMESTAMP_FORMAT).to_string();

        if let Ok(mut logs) = self.logs.lock() {
            while logs.len() >= self.capacity {
                logs.pop_front();
            }
            logs.push_back(format!("[{}] {}", timestamp, message));
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        match self.logs.lock() {
            Ok(logs) => logs.iter().rev().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Remove all entries
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Default location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .context("Could not determine a data directory for the log file")?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatcher writing to `log_path`, mirroring into `buffer` if present.
pub fn dispatch(config: &LoggingConfig, buffer: Option<&Logger>, log_path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let dispatch = fern::Dispatch::new().level(config.level_filter()).chain(
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format(LOG_TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(file),
    );

    Ok(match buffer.cloned() {
        Some(buffer) => dispatch.chain(fern::Output::call(move |record| {
            buffer.log(format!("{} {}", record.level(), record.args()));
        })),
        None => dispatch,
    })
}

/// Install the global logger. Returns the log file path, or `None` when logging is disabled.
pub fn init(config: &LoggingConfig, buffer: Option<&Logger>) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_path = get_log_file_path()?;
    dispatch(config, buffer, &log_path)?
        .apply()
        .context("A global logger is already installed")?;
    log::info!("Logging to {}", log_path.display());
    Ok(Some(log_path))
}
