/*!
 * Discworld novels.
 *
 * Every Discworld book shares the same author and series. The only thing a
 * caller adds on top of a plain `Book` is the subseries it belongs to.
 */

use std::fmt;

use crate::book::{Book, current_year};

/// Author of every Discworld novel
pub const DISCWORLD_AUTHOR: &str = "Terry Pratchett";

/// Series name used in the subseries sentence
pub const DISCWORLD_SERIES: &str = "Discworld";

/// A book from the Discworld series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscworldBook {
    book: Book,
    /// Subseries within Discworld, empty when unknown
    pub subseries: String,
}

impl DiscworldBook {
    pub fn new(title: impl Into<String>, year: i64) -> Self {
        Self::with_reference_year(title, year, current_year())
    }

    pub fn with_reference_year(title: impl Into<String>, year: i64, reference_year: i64) -> Self {
        Self {
            book: Book::with_reference_year(title, DISCWORLD_AUTHOR, year, reference_year),
            subseries: String::new(),
        }
    }

    pub fn series(&self) -> &'static str {
        DISCWORLD_SERIES
    }

    pub fn set_subseries(&mut self, subseries: impl Into<String>) {
        self.subseries = subseries.into();
    }

    /// Underlying book data
    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }

    /// Book summary, followed by the subseries line when one is set
    pub fn render(&self) -> String {
        let base = self.book.render();
        if self.subseries.is_empty() {
            base
        } else {
            format!(
                "{}\nThis book belongs to the \"{}\" subseries of {}.",
                base,
                self.subseries,
                self.series()
            )
        }
    }
}

impl fmt::Display for DiscworldBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
