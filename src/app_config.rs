use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::book::current_year;
use crate::errors::CatalogError;
use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles loading, validating and saving the settings that
/// drive a catalog run.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// JSON file, or directory of JSON files, holding the book records
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// Line written after every rendered book
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Year ages are measured against; the current year when unset
    #[serde(default)]
    pub reference_year: Option<i64>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_path() -> String {
    "books.json".to_string()
}

fn default_separator() -> String {
    "----".to_string()
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.input_path.trim().is_empty() {
            return Err(CatalogError::Config("input path must not be empty".to_string()));
        }

        if self.separator.is_empty() {
            return Err(CatalogError::Config("separator must not be empty".to_string()));
        }

        Ok(())
    }

    /// Year ages are measured against for this run
    pub fn effective_reference_year(&self) -> i64 {
        self.reference_year.unwrap_or_else(current_year)
    }

    /// Load the configuration at `path`, writing a default one when the file is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if FileManager::file_exists(path) {
            let content = FileManager::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        FileManager::write_to_file(path, &config_json)?;

        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            separator: default_separator(),
            reference_year: None,
            log_level: LogLevel::default(),
        }
    }
}
