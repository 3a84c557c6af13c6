//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical task shape shared by display, commands and storage.
//!
//! # Invariants
//! - Task variants form a closed set; adding one touches display and codec.
//! - Completion only moves forward; there is no un-done operation.

pub mod task;
