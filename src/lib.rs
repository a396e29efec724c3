//! bookshelf - Interactive in-memory book catalog
//!
//! A line-oriented console application for tracking books. State lives in
//! process memory only; when the shell exits, the catalog is gone.
//!
//! # Architecture
//!
//! The system is built from small, single-concern pieces composed behind
//! traits:
//! - Storage and rendering sit behind narrow traits
//! - The catalog façade owns one of each, injected at construction
//! - The shell drives the catalog from a blocking read-eval loop
//!
//! # Modules
//!
//! - `domain`: Data structures (Book)
//! - `storage`: Storage trait and the in-memory backend
//! - `render`: Formatter trait and the log/plain/JSON formatters
//! - `library`: The catalog façade
//! - `shell`: The interactive command loop
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Start the interactive shell
//! bookshelf
//!
//! # Render `show` output as plain lines instead of log lines
//! bookshelf --output plain
//!
//! # Script a session through stdin
//! printf 'add\n1984\nOrwell\n1949\nshow\nexit\n' | bookshelf
//! ```

pub mod cli;
pub mod domain;
pub mod library;
pub mod render;
pub mod shell;
pub mod storage;

// Re-export main types at crate root for convenience
pub use domain::Book;
pub use library::Catalog;
pub use render::{BookFormatter, JsonFormatter, LogFormatter, PlainFormatter};
pub use shell::{Shell, ShellCommand};
pub use storage::{BookStorage, MemoryStorage};
