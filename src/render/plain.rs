//! Formatter that writes plain lines to an arbitrary writer.

use std::io::{self, Write};

use crate::domain::Book;

use super::BookFormatter;

/// Writes one `Title: .., Author: .., Year: ..` line per book.
///
/// Generic over the writer so output can go to stdout in production and to
/// an in-memory buffer in tests.
#[derive(Debug)]
pub struct PlainFormatter<W: Write> {
    writer: W,
}

impl<W: Write> PlainFormatter<W> {
    /// Create a formatter over an arbitrary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl PlainFormatter<io::Stdout> {
    /// Formatter over the process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BookFormatter for PlainFormatter<W> {
    fn log_books(&mut self, books: &[Book]) {
        for book in books {
            // Display output is best effort; sink errors are not surfaced.
            let _ = writeln!(self.writer, "{book}");
        }
    }
}
