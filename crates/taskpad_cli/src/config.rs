//! Compile-time configuration.
//!
//! The interactive protocol takes no flags or environment variables; every
//! knob is a constant.

/// Directory holding the persistence file, relative to the working directory.
pub const DATA_DIR: &str = "data";

/// Persistence file name inside [`DATA_DIR`].
pub const DATA_FILE: &str = "taskpad.txt";

/// Directory for rotating diagnostic logs.
pub const LOG_DIR: &str = "logs";
