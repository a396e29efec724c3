//! Command-line interface for bookshelf.
//!
//! Parses the process arguments, wires storage and rendering into a
//! catalog, and hands control to the interactive shell.

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::library::Catalog;
use crate::render::{BookFormatter, JsonFormatter, LogFormatter, PlainFormatter};
use crate::shell::Shell;
use crate::storage::MemoryStorage;

/// bookshelf - interactive in-memory book catalog
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where `show` sends its output
    #[arg(long, value_enum, default_value = "log")]
    pub output: OutputMode,
}

/// Output sink for the `show` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Timestamped, leveled lines through the log sink
    Log,

    /// Plain lines on stdout
    Plain,

    /// One JSON object per book on stdout
    Json,
}

impl Cli {
    /// Execute the CLI: run an interactive shell until `exit` or end of input
    pub fn execute(self) -> Result<()> {
        let formatter: Box<dyn BookFormatter> = match self.output {
            OutputMode::Log => Box::new(LogFormatter::new()),
            OutputMode::Plain => Box::new(PlainFormatter::stdout()),
            OutputMode::Json => Box::new(JsonFormatter::stdout()),
        };

        let catalog = Catalog::new(Box::new(MemoryStorage::new()), formatter);

        let stdin = io::stdin();
        let mut shell = Shell::new(catalog, stdin.lock(), io::stdout());
        shell.run()
    }
}
