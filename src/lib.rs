/*!
 * # Bookshelf - a small typed book catalog
 *
 * Loads book records from JSON and renders each one as a short
 * human-readable summary.
 *
 * ## Features
 *
 * - Book records with an age captured once against a reference year
 * - Discworld novels with a fixed author and an optional subseries
 * - Insertion-ordered, duplicate-free character lists
 * - Loading from a single JSON file or a directory of JSON files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `book`: The base book record
 * - `discworld`: Discworld books layered on top of `book`
 * - `catalog`: Input records, the `CatalogEntry` trait, loading and rendering
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language name lookups
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod book;
pub mod catalog;
pub mod discworld;
pub mod errors;
pub mod file_utils;
pub mod language_utils;

// Re-export main types for easier usage
pub use app_config::Config;
pub use book::{Book, CharacterSet, DEFAULT_LANGUAGE};
pub use catalog::{BookRecord, Catalog, CatalogEntry, EntryKind, build_entry, load_records};
pub use discworld::{DISCWORLD_AUTHOR, DISCWORLD_SERIES, DiscworldBook};
pub use errors::CatalogError;
