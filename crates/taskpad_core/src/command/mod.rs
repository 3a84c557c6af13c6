//! Command layer: input parsing and execution.
//!
//! # Responsibility
//! - Turn one raw input line into a typed command.
//! - Execute commands against the task list and produce user feedback.
//!
//! # Invariants
//! - Recoverable command errors never mutate the task list and never touch
//!   the store.
//! - Every mutating command persists the full list before reporting success.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod interpreter;
pub mod parser;

pub use interpreter::{Interpreter, Outcome, FAREWELL};
pub use parser::{parse, Command};

pub type CommandResult<T> = Result<T, CommandError>;

/// Per-command failure. The session continues after reporting one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `todo` was given an empty or whitespace-only description.
    EmptyDescription,
    /// `deadline`/`event` input lacked its ` /by ` / ` /at ` marker.
    MissingArgument {
        command: &'static str,
        marker: &'static str,
    },
    /// `delete`/`done` argument was non-numeric or out of bounds.
    InvalidIndex(String),
    /// First token matched no known command.
    UnrecognizedCommand(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => {
                write!(f, "the description of a todo cannot be empty")
            }
            Self::MissingArgument { command, marker } => write!(
                f,
                "a {command} needs `{marker}` between its description and its time"
            ),
            Self::InvalidIndex(given) => {
                write!(f, "there is no task numbered `{given}`")
            }
            Self::UnrecognizedCommand(command) => {
                write!(f, "I don't know what `{command}` means")
            }
        }
    }
}

impl Error for CommandError {}
