//! Formatter that writes books as JSON lines.

use std::io::{self, Write};

use crate::domain::Book;

use super::BookFormatter;

/// Writes one JSON object per book per line.
#[derive(Debug)]
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a formatter over an arbitrary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonFormatter<io::Stdout> {
    /// Formatter over the process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BookFormatter for JsonFormatter<W> {
    fn log_books(&mut self, books: &[Book]) {
        for book in books {
            // Serializing three plain string fields cannot fail in practice;
            // sink errors are not surfaced either way.
            if let Ok(line) = serde_json::to_string(book) {
                let _ = writeln!(self.writer, "{line}");
            }
        }
    }
}
