/*!
 * Catalog loading and rendering.
 *
 * Book records are read from JSON, turned into either a plain `Book` or a
 * `DiscworldBook` depending on whether they name a subseries, and rendered
 * one after the other with a separator line between them.
 */

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::book::{Book, DEFAULT_LANGUAGE};
use crate::discworld::DiscworldBook;
use crate::errors::CatalogError;
use crate::file_utils::FileManager;
use crate::language_utils;

/// One book as it appears in the JSON input
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookRecord {
    pub title: String,
    /// Ignored for Discworld records
    #[serde(default)]
    pub author: String,
    pub year: i64,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub main_characters: Vec<String>,
    /// Only present on Discworld records
    #[serde(default)]
    pub subseries: Option<String>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Which kind of book an entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Book,
    Discworld,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Book => write!(f, "book"),
            EntryKind::Discworld => write!(f, "discworld"),
        }
    }
}

/// Operations shared by every kind of catalog entry
pub trait CatalogEntry: fmt::Debug {
    fn kind(&self) -> EntryKind;

    /// Book data behind the entry
    fn book(&self) -> &Book;

    fn book_mut(&mut self) -> &mut Book;

    /// Human-readable summary of the entry
    fn render(&self) -> String;

    fn add_character(&mut self, name: &str) {
        self.book_mut().add_character(name);
    }

    fn describe_age(&self) -> String {
        self.book().describe_age()
    }

    fn set_language(&mut self, language: &str) {
        self.book_mut().set_language(language);
    }
}

impl CatalogEntry for Book {
    fn kind(&self) -> EntryKind {
        EntryKind::Book
    }

    fn book(&self) -> &Book {
        self
    }

    fn book_mut(&mut self) -> &mut Book {
        self
    }

    fn render(&self) -> String {
        Book::render(self)
    }
}

impl CatalogEntry for DiscworldBook {
    fn kind(&self) -> EntryKind {
        EntryKind::Discworld
    }

    fn book(&self) -> &Book {
        DiscworldBook::book(self)
    }

    fn book_mut(&mut self) -> &mut Book {
        DiscworldBook::book_mut(self)
    }

    fn render(&self) -> String {
        DiscworldBook::render(self)
    }
}

/// Load book records from a JSON file, or from every JSON file below a directory
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<BookRecord>, CatalogError> {
    let path = path.as_ref();

    if FileManager::dir_exists(path) {
        let files = FileManager::find_files(path, "json")
            .map_err(|e| CatalogError::File(e.to_string()))?;
        let mut records = Vec::new();
        for file in &files {
            records.extend(load_file(file)?);
        }
        info!("Loaded {} book records from {} files in {:?}", records.len(), files.len(), path);
        return Ok(records);
    }

    let records = load_file(path)?;
    info!("Loaded {} book records from {:?}", records.len(), path);
    Ok(records)
}

fn load_file(path: &Path) -> Result<Vec<BookRecord>, CatalogError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CatalogError::File(format!("{:?}: {}", path, e)))?;
    serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Build the catalog entry a record describes
pub fn build_entry(record: &BookRecord, reference_year: i64) -> Box<dyn CatalogEntry> {
    let mut entry: Box<dyn CatalogEntry> = match &record.subseries {
        Some(subseries) => {
            let mut book = DiscworldBook::with_reference_year(&record.title, record.year, reference_year);
            book.set_subseries(subseries);
            Box::new(book)
        }
        None => Box::new(Book::with_reference_year(
            &record.title,
            &record.author,
            record.year,
            reference_year,
        )),
    };

    if record.language != DEFAULT_LANGUAGE {
        if !language_utils::is_known_language(&record.language) {
            warn!("Unrecognised language {:?} for {:?}", record.language, record.title);
        }
        entry.set_language(&record.language);
    }

    for name in &record.main_characters {
        entry.add_character(name);
    }

    debug!(
        "Built {} entry for {:?} ({})",
        entry.kind(),
        record.title,
        language_utils::language_code(entry.book().language()).unwrap_or("??")
    );
    entry
}

/// An ordered collection of catalog entries
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Box<dyn CatalogEntry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one entry per record, keeping input order
    pub fn from_records(records: &[BookRecord], reference_year: i64) -> Self {
        Self {
            entries: records
                .iter()
                .map(|record| build_entry(record, reference_year))
                .collect(),
        }
    }

    pub fn push(&mut self, entry: Box<dyn CatalogEntry>) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Box<dyn CatalogEntry>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every rendered entry followed by `separator` on its own line
    pub fn render_to<W: Write>(&self, writer: &mut W, separator: &str) -> Result<(), CatalogError> {
        for entry in &self.entries {
            writeln!(writer, "{}", entry.render())?;
            writeln!(writer, "{}", separator)?;
        }
        writer.flush()?;
        Ok(())
    }
}
