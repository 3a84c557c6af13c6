//! Text codec for the persisted task file.
//!
//! # Responsibility
//! - Encode tasks to the one-line-per-task delimited format.
//! - Decode persisted records back into tasks, rejecting malformed ones.
//!
//! # Invariants
//! - `decode_line(encode(task))` reproduces `task` exactly.
//! - Field order is fixed: icon, status, description, extra marker.
//! - Unknown icons and status values are decode errors, never defaults.

use crate::model::task::{Task, TaskKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Multi-character field separator.
///
/// U+2225 with surrounding spaces keeps the token out of anything a user
/// would plausibly type into a description.
pub const FIELD_SEPARATOR: &str = " \u{2225} ";

const STATUS_DONE: &str = "1";
const STATUS_OPEN: &str = "0";

/// Malformed persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// First field is not one of the known type icons.
    UnrecognizedTaskType(String),
    /// Second field is not `"0"` or `"1"`.
    UnrecognizedStatus(String),
    /// Record ended before the fields its type requires.
    TruncatedRecord { expected: usize, found: usize },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedTaskType(icon) => {
                write!(f, "unrecognized task type icon: `{icon}`")
            }
            Self::UnrecognizedStatus(status) => {
                write!(f, "unrecognized task status: `{status}`")
            }
            Self::TruncatedRecord { expected, found } => {
                write!(f, "record has {found} field(s), expected {expected}")
            }
        }
    }
}

impl Error for DecodeError {}

/// Encodes one task as a single record line, without a trailing newline.
pub fn encode(task: &Task) -> String {
    let status = if task.done { STATUS_DONE } else { STATUS_OPEN };
    let mut fields = vec![
        task.kind.icon().to_string(),
        status.to_string(),
        task.description.clone(),
    ];
    if let Some(extra) = &task.extra {
        fields.push(extra.clone());
    }
    fields.join(FIELD_SEPARATOR)
}

/// Encodes the whole list, one record per line, no trailing newline.
pub fn encode_all(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(encode)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits one persisted line on the field separator and decodes it.
pub fn decode_line(line: &str) -> Result<Task, DecodeError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    decode_record(&fields)
}

/// Decodes an ordered field sequence into a task.
///
/// Fields beyond what the record's type requires are ignored, matching the
/// permissive read side of the format.
///
/// # Errors
/// - `UnrecognizedTaskType` / `UnrecognizedStatus` for unknown tag values.
/// - `TruncatedRecord` when the sequence is shorter than the type requires.
pub fn decode_record(fields: &[&str]) -> Result<Task, DecodeError> {
    let icon = field(fields, 0, 3)?;
    let kind = TaskKind::from_icon(icon)
        .ok_or_else(|| DecodeError::UnrecognizedTaskType(icon.to_string()))?;

    let expected = match kind {
        TaskKind::Todo => 3,
        TaskKind::Deadline | TaskKind::Event => 4,
    };
    let status = field(fields, 1, expected)?;
    let description = field(fields, 2, expected)?;

    let mut task = match kind {
        TaskKind::Todo => Task::todo(description),
        TaskKind::Deadline => Task::deadline(description, field(fields, 3, expected)?),
        TaskKind::Event => Task::event(description, field(fields, 3, expected)?),
    };

    match status {
        STATUS_DONE => task.mark_done(),
        STATUS_OPEN => {}
        other => return Err(DecodeError::UnrecognizedStatus(other.to_string())),
    }
    Ok(task)
}

fn field<'a>(fields: &[&'a str], index: usize, expected: usize) -> Result<&'a str, DecodeError> {
    fields.get(index).copied().ok_or(DecodeError::TruncatedRecord {
        expected,
        found: fields.len(),
    })
}
