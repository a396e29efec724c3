//! Shell command parsing.

use std::str::FromStr;

use thiserror::Error;

/// A command understood by the interactive shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Prompt for a book and add it to the catalog
    Add,

    /// Prompt for a title and remove matching books
    Remove,

    /// Display the catalog
    Show,

    /// List the available commands
    Help,

    /// Leave the shell
    Exit,
}

/// Input that matches no known command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for ShellCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "show" => Ok(Self::Show),
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!("add".parse::<ShellCommand>().unwrap(), ShellCommand::Add);
        assert_eq!(
            "remove".parse::<ShellCommand>().unwrap(),
            ShellCommand::Remove
        );
        assert_eq!("show".parse::<ShellCommand>().unwrap(), ShellCommand::Show);
        assert_eq!("help".parse::<ShellCommand>().unwrap(), ShellCommand::Help);
        assert_eq!("exit".parse::<ShellCommand>().unwrap(), ShellCommand::Exit);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!("  ADD ".parse::<ShellCommand>().unwrap(), ShellCommand::Add);
        assert_eq!(
            "\tExIt\n".parse::<ShellCommand>().unwrap(),
            ShellCommand::Exit
        );
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        let err = "foo".parse::<ShellCommand>().unwrap_err();
        assert_eq!(err, UnknownCommand("foo".to_string()));

        // An empty line is not a command either
        assert!("".parse::<ShellCommand>().is_err());
        assert!("   ".parse::<ShellCommand>().is_err());
    }
}
