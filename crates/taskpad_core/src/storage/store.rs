//! File-backed task store.
//!
//! # Responsibility
//! - Bootstrap the data directory and persistence file on first run.
//! - Load and fully rewrite the persisted task list.
//!
//! # Invariants
//! - `save` replaces the whole file; there is no incremental update path.
//! - `load` aborts on the first undecodable record and reports its line
//!   number.

use super::{codec, StoreError, StoreResult, TaskStore};
use crate::model::task::Task;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// What the bootstrap had to create, for the startup report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreBootstrap {
    pub created_dir: bool,
    pub created_file: bool,
}

impl StoreBootstrap {
    /// A pre-existing file means there is prior state worth loading.
    pub fn file_preexisted(&self) -> bool {
        !self.created_file
    }
}

/// Task store persisting to one flat text file.
#[derive(Debug)]
pub struct FileTaskStore {
    file_path: PathBuf,
}

impl FileTaskStore {
    /// Opens the store, creating the data directory and file when absent.
    ///
    /// Returns the store together with a record of what had to be created so
    /// the session can report it.
    ///
    /// # Errors
    /// - `StoreError::Io` when the directory or file cannot be created.
    pub fn open(data_dir: &Path, file_name: &str) -> StoreResult<(Self, StoreBootstrap)> {
        let created_dir = !data_dir.is_dir();
        if created_dir {
            fs::create_dir_all(data_dir).map_err(|source| {
                error!(
                    "event=store_open module=storage status=error path={} error={source}",
                    data_dir.display()
                );
                StoreError::Io {
                    path: data_dir.to_path_buf(),
                    source,
                }
            })?;
        }

        let file_path = data_dir.join(file_name);
        let created_file = !file_path.is_file();
        if created_file {
            fs::write(&file_path, "").map_err(|source| {
                error!(
                    "event=store_open module=storage status=error path={} error={source}",
                    file_path.display()
                );
                StoreError::Io {
                    path: file_path.clone(),
                    source,
                }
            })?;
        }

        info!(
            "event=store_open module=storage status=ok path={} created_dir={created_dir} created_file={created_file}",
            file_path.display()
        );
        Ok((
            Self { file_path },
            StoreBootstrap {
                created_dir,
                created_file,
            },
        ))
    }

    /// Path of the persistence file, for startup reporting.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let started_at = Instant::now();
        let contents = fs::read_to_string(&self.file_path).map_err(|source| {
            error!(
                "event=store_load module=storage status=error path={} error={source}",
                self.file_path.display()
            );
            self.io_error(source)
        })?;

        // A file holding only whitespace counts as empty, not as one
        // undecodable record.
        if contents.trim().is_empty() {
            info!(
                "event=store_load module=storage status=ok count=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        }

        let mut tasks = Vec::new();
        for (line_index, line) in contents.lines().enumerate() {
            let task = codec::decode_line(line).map_err(|source| {
                let line = line_index + 1;
                error!(
                    "event=store_load module=storage status=error path={} line={line} error={source}",
                    self.file_path.display()
                );
                StoreError::Decode { line, source }
            })?;
            tasks.push(task);
        }

        info!(
            "event=store_load module=storage status=ok count={} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let started_at = Instant::now();
        fs::write(&self.file_path, codec::encode_all(tasks)).map_err(|source| {
            error!(
                "event=store_save module=storage status=error path={} error={source}",
                self.file_path.display()
            );
            self.io_error(source)
        })?;

        info!(
            "event=store_save module=storage status=ok count={} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}
