//! Interactive command loop.
//!
//! The shell reads commands line by line, dispatches them to the catalog,
//! and keeps going until `exit` or end of input. It has one state
//! ("awaiting command"); field prompts for `add` and `remove` happen inline
//! within a single dispatch.

pub mod command;

pub use command::{ShellCommand, UnknownCommand};

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::library::Catalog;

const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";
const INVALID_COMMAND: &str = "Invalid command. Please try again.";

/// The interactive shell driving a catalog.
///
/// Generic over its reader and writer so sessions can be scripted in tests
/// and piped in production.
pub struct Shell<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given catalog and I/O endpoints
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            input,
            output,
            catalog,
        }
    }

    /// Run the command loop until `exit` or end of input.
    ///
    /// Only I/O failures on the underlying endpoints are errors; unknown
    /// commands print a notice and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompt(COMMAND_PROMPT)?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Add) => self.add_book()?,
                Ok(ShellCommand::Remove) => self.remove_book()?,
                Ok(ShellCommand::Show) => self.catalog.show_books(),
                Ok(ShellCommand::Help) => self.print_help()?,
                Ok(ShellCommand::Exit) => break,
                Err(UnknownCommand(_)) => self.say(INVALID_COMMAND)?,
            }
        }

        Ok(())
    }

    fn add_book(&mut self) -> Result<()> {
        let Some(title) = self.ask("Enter book title: ")? else {
            return Ok(());
        };
        let Some(author) = self.ask("Enter book author: ")? else {
            return Ok(());
        };
        let Some(year) = self.ask("Enter book year: ")? else {
            return Ok(());
        };

        self.catalog.add_book(title, author, year);
        Ok(())
    }

    fn remove_book(&mut self) -> Result<()> {
        let Some(title) = self.ask("Enter book title to remove: ")? else {
            return Ok(());
        };

        self.catalog.remove_book(&title);
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        self.say("Commands: add, remove, show, help, exit")
    }

    /// Prompt for one field; `None` means the input ended mid-command and
    /// the partial entry is discarded.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompt(prompt)?;
        self.read_line()
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }

    /// Read one line, trimmed. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
