//! Input line parsing.
//!
//! # Responsibility
//! - Split one trimmed input line into command word and arguments.
//! - Validate argument shape; index bounds are the interpreter's concern.
//!
//! # Invariants
//! - Descriptions and markers are carried verbatim (no trimming beyond the
//!   command-word split), except the todo emptiness check.
//! - Parsing is stateless; no command spans multiple lines.

use super::{CommandError, CommandResult};

const COMMAND_EXIT: &str = "bye";
const COMMAND_ADD_TODO: &str = "todo";
const COMMAND_ADD_DEADLINE: &str = "deadline";
const COMMAND_ADD_EVENT: &str = "event";
const COMMAND_DELETE: &str = "delete";
const COMMAND_LIST: &str = "list";
const COMMAND_MARK_DONE: &str = "done";

const DEADLINE_MARKER: &str = " /by ";
const EVENT_MARKER: &str = " /at ";

/// One parsed input line.
///
/// `Delete`/`MarkDone` keep the raw target string: numeric conversion and
/// bounds checking share a single failure path in the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    AddTodo { description: String },
    AddDeadline { description: String, by: String },
    AddEvent { description: String, at: String },
    Delete { target: String },
    MarkDone { target: String },
}

/// Parses one trimmed, non-blank input line.
///
/// The first whitespace-delimited token selects the command; the remainder
/// is that command's argument string, possibly empty.
///
/// # Errors
/// - `EmptyDescription` for a blank todo description.
/// - `MissingArgument` when a deadline/event lacks its marker token.
/// - `UnrecognizedCommand` for an unknown first token.
pub fn parse(input: &str) -> CommandResult<Command> {
    let (command, args) = match input.split_once(' ') {
        Some((command, args)) => (command, args),
        None => (input, ""),
    };

    match command {
        COMMAND_EXIT => Ok(Command::Exit),
        COMMAND_LIST => Ok(Command::List),
        COMMAND_ADD_TODO => parse_todo(args),
        COMMAND_ADD_DEADLINE => parse_deadline(args),
        COMMAND_ADD_EVENT => parse_event(args),
        COMMAND_DELETE => Ok(Command::Delete {
            target: args.to_string(),
        }),
        COMMAND_MARK_DONE => Ok(Command::MarkDone {
            target: args.to_string(),
        }),
        other => Err(CommandError::UnrecognizedCommand(other.to_string())),
    }
}

fn parse_todo(args: &str) -> CommandResult<Command> {
    if args.trim().is_empty() {
        return Err(CommandError::EmptyDescription);
    }
    Ok(Command::AddTodo {
        description: args.to_string(),
    })
}

fn parse_deadline(args: &str) -> CommandResult<Command> {
    let (description, by) = split_on_marker(args, COMMAND_ADD_DEADLINE, DEADLINE_MARKER)?;
    Ok(Command::AddDeadline { description, by })
}

fn parse_event(args: &str) -> CommandResult<Command> {
    let (description, at) = split_on_marker(args, COMMAND_ADD_EVENT, EVENT_MARKER)?;
    Ok(Command::AddEvent { description, at })
}

// Split on the literal marker token, spaces included, so descriptions can
// still contain a bare `/by` or `/at` word glued to punctuation.
fn split_on_marker(
    args: &str,
    command: &'static str,
    marker: &'static str,
) -> CommandResult<(String, String)> {
    match args.split_once(marker) {
        Some((description, rest)) => Ok((description.to_string(), rest.to_string())),
        None => Err(CommandError::MissingArgument { command, marker }),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, Command, CommandError};

    #[test]
    fn first_token_selects_command() {
        assert_eq!(parse("list"), Ok(Command::List));
        assert_eq!(parse("bye"), Ok(Command::Exit));
    }

    #[test]
    fn todo_keeps_description_verbatim() {
        assert_eq!(
            parse("todo buy milk"),
            Ok(Command::AddTodo {
                description: "buy milk".to_string()
            })
        );
    }

    #[test]
    fn whitespace_only_todo_description_is_rejected() {
        assert_eq!(parse("todo    "), Err(CommandError::EmptyDescription));
    }

    #[test]
    fn deadline_splits_on_literal_marker() {
        assert_eq!(
            parse("deadline submit report /by Friday"),
            Ok(Command::AddDeadline {
                description: "submit report".to_string(),
                by: "Friday".to_string(),
            })
        );
    }

    #[test]
    fn deadline_without_marker_is_missing_argument() {
        assert_eq!(
            parse("deadline submit report"),
            Err(CommandError::MissingArgument {
                command: "deadline",
                marker: " /by ",
            })
        );
    }

    #[test]
    fn event_splits_on_literal_marker() {
        assert_eq!(
            parse("event standup /at Mon 9am"),
            Ok(Command::AddEvent {
                description: "standup".to_string(),
                at: "Mon 9am".to_string(),
            })
        );
    }

    #[test]
    fn unknown_command_is_reported_with_its_token() {
        assert_eq!(
            parse("frobnicate"),
            Err(CommandError::UnrecognizedCommand("frobnicate".to_string()))
        );
    }
}
