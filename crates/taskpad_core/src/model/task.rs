//! Task domain model.
//!
//! # Responsibility
//! - Define the three task variants and their shared completion lifecycle.
//! - Render the user-facing display line for one task.
//!
//! # Invariants
//! - `extra` is `Some` for deadlines/events and `None` for todos; the
//!   constructors are the only intended way to build a task.
//! - Marking a task done is idempotent.

use std::fmt::{Display, Formatter};

/// Closed set of task variants.
///
/// One task struct carries all three variants; display and the persisted
/// encoding switch on this tag instead of dispatching through a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain actionable item.
    Todo,
    /// Item with a free-text deadline marker.
    Deadline,
    /// Item with a free-text time/place marker.
    Event,
}

impl TaskKind {
    /// Single-character tag used in both display and persisted form.
    pub fn icon(self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline => 'D',
            Self::Event => 'E',
        }
    }

    /// Resolves a persisted icon field back to a variant.
    ///
    /// Returns `None` for anything other than the exact one-character tags.
    pub fn from_icon(icon: &str) -> Option<Self> {
        match icon {
            "T" => Some(Self::Todo),
            "D" => Some(Self::Deadline),
            "E" => Some(Self::Event),
            _ => None,
        }
    }
}

/// One tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub kind: TaskKind,
    /// Taken verbatim from user input.
    pub description: String,
    pub done: bool,
    /// Deadline `by` / event `at` marker. Free text, may be empty.
    pub extra: Option<String>,
}

impl Task {
    /// Creates a not-yet-done todo.
    ///
    /// Description emptiness is a command-boundary concern, not validated
    /// here.
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::Todo,
            description: description.into(),
            done: false,
            extra: None,
        }
    }

    /// Creates a not-yet-done deadline with its `by` marker.
    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::Deadline,
            description: description.into(),
            done: false,
            extra: Some(by.into()),
        }
    }

    /// Creates a not-yet-done event with its `at` marker.
    pub fn event(description: impl Into<String>, at: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::Event,
            description: description.into(),
            done: false,
            extra: Some(at.into()),
        }
    }

    /// Marks this task as completed. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Visual completion indicator used inside the display line.
    pub fn status_mark(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }
}

impl Display for Task {
    /// Renders `[<icon>][<status mark>] <description>` plus the variant
    /// suffix (` (by: ...)` / ` (at: ...)`).
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.icon(),
            self.status_mark(),
            self.description
        )?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline => write!(f, " (by: {})", self.extra.as_deref().unwrap_or("")),
            TaskKind::Event => write!(f, " (at: {})", self.extra.as_deref().unwrap_or("")),
        }
    }
}
