//! Catalog operations over injected storage and rendering.

use tracing::debug;

use crate::domain::Book;
use crate::render::{BookFormatter, LogFormatter};
use crate::storage::{BookStorage, MemoryStorage};

/// Book catalog with injected storage and formatter.
///
/// Both collaborators are fixed at construction for the lifetime of the
/// catalog. Every operation is a single synchronous action against
/// in-memory state.
pub struct Catalog {
    storage: Box<dyn BookStorage>,
    formatter: Box<dyn BookFormatter>,
}

impl Catalog {
    /// Create a catalog from explicit storage and formatter implementations
    pub fn new(storage: Box<dyn BookStorage>, formatter: Box<dyn BookFormatter>) -> Self {
        Self { storage, formatter }
    }

    /// Convenience catalog: in-memory storage, log-sink output
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()), Box::new(LogFormatter::new()))
    }

    /// Add a book to the catalog.
    ///
    /// Adding a triple that is already stored is a silent no-op.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) {
        let book = Book::new(title, author, year);
        if !self.storage.add(book) {
            debug!("duplicate book ignored");
        }
    }

    /// Remove every book with this exact title.
    ///
    /// Removing a title that is not stored is a silent no-op.
    pub fn remove_book(&mut self, title: &str) {
        let removed = self.storage.remove_by_title(title);
        debug!("removed {removed} book(s) titled {title:?}");
    }

    /// Render the current books through the formatter, in insertion order
    pub fn show_books(&mut self) {
        let books = self.storage.list();
        self.formatter.log_books(&books);
    }
}
