//! Constants used throughout the crate
//!
//! Centralizes rendering literals, configuration file names and the bounds
//! checked by configuration validation.

// Rendering
/// Decoration placed on both sides of a list title in the header line
pub const HEADER_DECORATION: &str = "----";
/// Maximum length accepted for a configured header decoration
pub const HEADER_DECORATION_MAX_LEN: usize = 16;

// Configuration
pub const APP_NAME: &str = "todolist";
pub const CONFIG_FILE_LOCAL: &str = "todolist.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Logging
pub const LOG_FILE_NAME: &str = "todolist.log";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
/// Maximum entries kept by the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 1000;
pub const LOG_BUFFER_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
