/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use bookshelf::app_config::{Config, LogLevel};
use bookshelf::errors::CatalogError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.input_path, "books.json");
    assert_eq!(config.separator, "----");
    assert_eq!(config.reference_year, None);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withInvalidValues_shouldReturnConfigError() {
    let mut config = Config::default();
    config.input_path = "  ".to_string();
    assert!(matches!(config.validate(), Err(CatalogError::Config(_))));

    let mut config = Config::default();
    config.separator = String::new();
    assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
}

/// A pinned reference year wins over the clock
#[test]
fn test_effectiveReferenceYear_withPinnedYear_shouldReturnIt() {
    let config = Config { reference_year: Some(1999), ..Config::default() };
    assert_eq!(config.effective_reference_year(), 1999);

    let config = Config::default();
    assert_eq!(config.effective_reference_year(), bookshelf::book::current_year());
}

/// Missing fields fall back to their defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{ "reference_year": 2000, "log_level": "debug" }"#)?;

    assert_eq!(config.input_path, "books.json");
    assert_eq!(config.separator, "----");
    assert_eq!(config.reference_year, Some(2000));
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// A missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert_eq!(config, Config::default());
    assert!(path.exists());
    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded, config);
    Ok(())
}

/// An existing config file is read back
#[test]
fn test_loadOrCreate_withExistingFile_shouldReadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "input_path": "library", "separator": "====", "log_level": "warn" }"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.input_path, "library");
    assert_eq!(config.separator, "====");
    assert_eq!(config.log_level, LogLevel::Warn);
    Ok(())
}

/// A malformed config file is an error
#[test]
fn test_loadOrCreate_withMalformedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

/// Log levels map onto the log crate filters
#[test]
fn test_logLevel_intoLevelFilter_shouldMatchName() {
    assert_eq!(log::LevelFilter::from(LogLevel::Error), log::LevelFilter::Error);
    assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
}
