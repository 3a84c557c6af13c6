//! Command execution against the task list.
//!
//! # Responsibility
//! - Own the in-memory task list for one session.
//! - Apply commands, persist mutations, and build feedback strings.
//!
//! # Invariants
//! - A rejected command leaves the list untouched and performs no save.
//! - Store failures propagate as typed fatal errors; the interpreter never
//!   terminates the process itself.

use super::parser::{parse, Command};
use super::CommandError;
use crate::model::task::Task;
use crate::storage::{StoreResult, TaskStore};
use log::debug;

/// Farewell line, shared by `bye` and the end-of-input path.
pub const FAREWELL: &str = "Bye! See you next time.";

/// Result of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Feedback to render; the session keeps going.
    Reply(String),
    /// Feedback to render; the session ends afterwards.
    Farewell(String),
}

impl Outcome {
    /// Feedback text regardless of whether the session continues.
    pub fn feedback(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Farewell(text) => text,
        }
    }
}

/// Executes parsed commands against the task list, saving through `S`.
pub struct Interpreter<S: TaskStore> {
    tasks: Vec<Task>,
    store: S,
}

impl<S: TaskStore> Interpreter<S> {
    /// Creates an interpreter over an already-loaded task list.
    pub fn new(store: S, tasks: Vec<Task>) -> Self {
        Self { tasks, store }
    }

    /// Current task list snapshot.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Executes one trimmed, non-blank input line.
    ///
    /// Recoverable command errors come back as a normal `Reply` carrying the
    /// user-facing message; only store failures surface as `Err`.
    ///
    /// # Errors
    /// - `StoreError` when persisting a mutation fails. The list may already
    ///   hold the mutation; the session is expected to end here.
    pub fn execute(&mut self, input: &str) -> StoreResult<Outcome> {
        let command = match parse(input) {
            Ok(command) => command,
            Err(err) => return Ok(Self::rejection(err)),
        };

        match command {
            Command::Exit => Ok(Outcome::Farewell(FAREWELL.to_string())),
            Command::List => Ok(Outcome::Reply(self.list_tasks())),
            Command::AddTodo { description } => self.add_task(Task::todo(description)),
            Command::AddDeadline { description, by } => {
                self.add_task(Task::deadline(description, by))
            }
            Command::AddEvent { description, at } => self.add_task(Task::event(description, at)),
            Command::Delete { target } => self.delete_task(&target),
            Command::MarkDone { target } => self.mark_task_done(&target),
        }
    }

    fn add_task(&mut self, task: Task) -> StoreResult<Outcome> {
        let display_line = task.to_string();
        self.tasks.push(task);
        self.store.save(&self.tasks)?;
        Ok(Outcome::Reply(format!(
            "Added this task:\n  {display_line}\nYou now have {} task(s) in the list",
            self.tasks.len()
        )))
    }

    fn delete_task(&mut self, target: &str) -> StoreResult<Outcome> {
        let index = match self.resolve_index(target) {
            Ok(index) => index,
            Err(err) => return Ok(Self::rejection(err)),
        };
        let task = self.tasks.remove(index);
        self.store.save(&self.tasks)?;
        Ok(Outcome::Reply(format!(
            "Removed this task:\n  {task}\nYou now have {} task(s) in the list",
            self.tasks.len()
        )))
    }

    fn mark_task_done(&mut self, target: &str) -> StoreResult<Outcome> {
        let index = match self.resolve_index(target) {
            Ok(index) => index,
            Err(err) => return Ok(Self::rejection(err)),
        };
        self.tasks[index].mark_done();
        self.store.save(&self.tasks)?;
        Ok(Outcome::Reply(format!(
            "Marked this task as done:\n  {}",
            self.tasks[index]
        )))
    }

    fn list_tasks(&self) -> String {
        let lines: Vec<String> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| format!("{}.{task}", index + 1))
            .collect();
        format!("Here is your task list:\n{}", lines.join("\n"))
    }

    /// Converts a 1-based user index into a 0-based list index.
    fn resolve_index(&self, target: &str) -> Result<usize, CommandError> {
        let number: usize = target
            .trim()
            .parse()
            .map_err(|_| CommandError::InvalidIndex(target.to_string()))?;
        if number == 0 || number > self.tasks.len() {
            return Err(CommandError::InvalidIndex(target.to_string()));
        }
        Ok(number - 1)
    }

    fn rejection(err: CommandError) -> Outcome {
        debug!("event=command_rejected module=command error={err}");
        Outcome::Reply(format!("Oops! {err}"))
    }
}
