/*!
 * Error types for the bookshelf application.
 *
 * The book model itself never fails. These errors cover loading the
 * catalog input and reading the configuration around it.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or writing a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Input file is not a valid list of book records
    #[error("Failed to parse {path:?}: {message}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Message from the JSON parser
        message: String,
    },

    /// Configuration value is not usable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
