//! Book records held by the catalog.

use serde::{Deserialize, Serialize};

/// An immutable catalogued book.
///
/// Equality is structural over all three fields. The year is kept as text,
/// exactly as entered; no numeric validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    year: String,
}

impl Book {
    /// Create a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    /// The book title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The publication year, as entered
    pub fn year(&self) -> &str {
        &self.year
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}
