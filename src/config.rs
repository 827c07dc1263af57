//! Configuration management for todolist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_LOCAL, CONFIG_FILE_NAME, CONFIG_GENERATED, HEADER_DECORATION, HEADER_DECORATION_MAX_LEN,
    LOG_LEVELS,
};
use crate::icons::{IconService, IconTheme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Marker theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Text placed on both sides of the list title
    pub header_decoration: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level written: error, warn, info, debug or trace
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            header_decoration: HEADER_DECORATION.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Icon service for the configured theme
    pub fn icons(&self) -> IconService {
        IconService::new(self.icon_theme)
    }
}

impl LoggingConfig {
    /// Parsed level filter; unknown names fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_LOCAL);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        Self::default_config_path().filter(|path| path.exists())
    }

    /// Path of the per-user config file, if a config directory exists
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let decoration = &self.display.header_decoration;
        if decoration.trim().is_empty() {
            anyhow::bail!("header_decoration cannot be empty");
        }
        if decoration.chars().any(char::is_control) {
            anyhow::bail!("header_decoration cannot contain control characters, got {:?}", decoration);
        }
        if decoration.chars().count() > HEADER_DECORATION_MAX_LEN {
            anyhow::bail!(
                "header_decoration cannot exceed {} characters, got {}",
                HEADER_DECORATION_MAX_LEN,
                decoration.chars().count()
            );
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid logging level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Write a commented default configuration file, creating parent directories
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let body = toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")?;
        let content = format!(
            "# Todolist Configuration File\n\
             #\n\
             # display.icon_theme: \"ascii\", \"unicode\" or \"emoji\"\n\
             # logging.level: error, warn, info, debug or trace\n\n{body}"
        );

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        log::info!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }
}
