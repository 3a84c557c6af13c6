//! Core domain logic for Taskpad.
//! This crate is the single source of truth for the task model, the
//! persisted-file format, and command semantics.

pub mod command;
pub mod logging;
pub mod model;
pub mod storage;

pub use command::{parse, Command, CommandError, CommandResult, Interpreter, Outcome, FAREWELL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskKind};
pub use storage::{
    decode_line, decode_record, encode, encode_all, DecodeError, FileTaskStore, StoreBootstrap,
    StoreError, StoreResult, TaskStore, FIELD_SEPARATOR,
};
