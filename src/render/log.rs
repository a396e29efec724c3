//! Formatter that routes books through the tracing sink.

use tracing::info;

use crate::domain::Book;

use super::BookFormatter;

/// Emits each book as one `info` line.
///
/// Timestamps and levels come from the installed subscriber, so the output
/// matches whatever log format the rest of the process uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFormatter;

impl LogFormatter {
    /// Create a new log formatter
    pub fn new() -> Self {
        Self
    }
}

impl BookFormatter for LogFormatter {
    fn log_books(&mut self, books: &[Book]) {
        for book in books {
            info!("{book}");
        }
    }
}
