/*!
 * Book records.
 *
 * A `Book` holds the bibliographic data of one catalog entry together with
 * its age, which is captured once when the value is built and never
 * recomputed afterwards.
 */

use chrono::Datelike;
use std::fmt;

/// Language every book is assumed to be written in unless told otherwise
pub const DEFAULT_LANGUAGE: &str = "English";

/// Returns the current calendar year from the local clock
pub fn current_year() -> i64 {
    i64::from(chrono::Local::now().year())
}

/// Character names with set semantics, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    names: Vec<String>,
}

impl CharacterSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, returning false when it was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    year: i64,
    /// Language the book is written in
    pub language: String,
    // Wide enough that reference_year - year never overflows
    age: i128,
    characters: CharacterSet,
}

impl Book {
    /// Create a book whose age is measured against the current year
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self::with_reference_year(title, author, year, current_year())
    }

    /// Create a book whose age is measured against `reference_year`
    pub fn with_reference_year(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        reference_year: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            language: DEFAULT_LANGUAGE.to_string(),
            age: i128::from(reference_year) - i128::from(year),
            characters: CharacterSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Years between publication and the reference year; negative for future books
    pub fn age(&self) -> i128 {
        self.age
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn characters(&self) -> &CharacterSet {
        &self.characters
    }

    /// Add a main character; adding a known name is a no-op
    pub fn add_character(&mut self, name: impl Into<String>) {
        self.characters.insert(name);
    }

    /// Sentence describing how old the book is
    pub fn describe_age(&self) -> String {
        if self.age < 0 {
            format!("This book will be published in {} years.", self.age.unsigned_abs())
        } else {
            format!("This book is {} years old.", self.age)
        }
    }

    /// Three-line summary of the book.
    ///
    /// The second line prints the raw age, so a book from the future reads
    /// "-N years ago". The third line is empty when no characters are known.
    pub fn render(&self) -> String {
        let written = format!(
            "{} was written by {} in {}.",
            self.title, self.author, self.language
        );
        let published = format!(
            "It was published in {}, that is, {} years ago.",
            self.year, self.age
        );
        let characters = if self.characters.is_empty() {
            String::new()
        } else {
            format!(
                "The main characters are: {}.",
                self.characters.iter().collect::<Vec<_>>().join(", ")
            )
        };

        [written, published, characters].join("\n")
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
