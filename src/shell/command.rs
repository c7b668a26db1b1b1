//! Command definitions
//!
//! Tokenizes one input line into a shell command.

use crate::error::{MfsError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Put,
    Get,
    Delete,
    List,
    Df,
    Quit,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Import a host file under its own name
    Put { name: String },

    /// Export a stored file, optionally under a different host name
    Get { name: String, dest: Option<String> },

    /// Remove a stored file
    Delete { name: String },

    /// Show every stored file
    List,

    /// Show remaining free space
    Df,

    /// Leave the shell
    Quit,
}

impl Command {
    /// Parse a line of whitespace-separated words
    ///
    /// Returns `Ok(None)` for a blank line. Words past the ones a command
    /// uses are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let mut next = || words.next().map(str::to_string);

        let command = match verb {
            "put" => Command::Put {
                name: next().ok_or(MfsError::MissingArgument("put <filename>"))?,
            },
            "get" => {
                let name = next().ok_or(MfsError::MissingArgument("get <filename> [newfilename]"))?;
                Command::Get { name, dest: next() }
            }
            "del" => Command::Delete {
                name: next().ok_or(MfsError::MissingArgument("del <filename>"))?,
            },
            "list" => Command::List,
            "df" => Command::Df,
            "quit" => Command::Quit,
            other => return Err(MfsError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Put { .. } => CommandType::Put,
            Command::Get { .. } => CommandType::Get,
            Command::Delete { .. } => CommandType::Delete,
            Command::List => CommandType::List,
            Command::Df => CommandType::Df,
            Command::Quit => CommandType::Quit,
        }
    }
}
