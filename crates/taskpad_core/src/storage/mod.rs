//! Persistence layer: line codec and the task store.
//!
//! # Responsibility
//! - Define the store contract used by the command layer.
//! - Keep file-format details inside the codec boundary.
//!
//! # Invariants
//! - `decode` is the exact inverse of `encode_all` for any valid task list.
//! - A single undecodable record aborts the whole load; there is no
//!   skip-bad-line recovery.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod codec;
pub mod store;

pub use codec::{decode_line, decode_record, encode, encode_all, DecodeError, FIELD_SEPARATOR};
pub use store::{FileTaskStore, StoreBootstrap};

pub type StoreResult<T> = Result<T, StoreError>;

/// Fatal persistence failure: the session cannot continue past one of these.
#[derive(Debug)]
pub enum StoreError {
    /// Could not create, read or write the persistence file.
    Io { path: PathBuf, source: io::Error },
    /// The persisted file holds an undecodable record.
    Decode { line: usize, source: DecodeError },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(
                f,
                "there was an error accessing the data file `{}`: {source}",
                path.display()
            ),
            Self::Decode { line, source } => {
                write!(f, "there was an error in the data file, line {line}: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Store contract for the command layer.
///
/// The interpreter only ever rewrites the full list; incremental updates are
/// out of scope by design.
pub trait TaskStore {
    /// Reads every persisted task, in file order.
    fn load(&self) -> StoreResult<Vec<Task>>;

    /// Replaces the persisted list with `tasks`.
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}
