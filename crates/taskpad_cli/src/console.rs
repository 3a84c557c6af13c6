//! Console response rendering.
//!
//! # Responsibility
//! - Wrap each logical response between two horizontal rules, indented.
//!
//! # Invariants
//! - All user-facing output goes through [`write_response_block`]; nothing
//!   else writes to the session's output stream.

use std::io::{self, Write};

// Four-space lead-in, then a sixty-underscore rule.
const HORIZONTAL_RULE: &str =
    "    ____________________________________________________________";
const RESPONSE_INDENT: &str = "     ";

/// Writes `text` as one decorated response block.
///
/// Each line of `text` is indented; the block ends with a blank separator
/// line.
pub fn write_response_block<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{HORIZONTAL_RULE}")?;
    for line in text.lines() {
        writeln!(out, "{RESPONSE_INDENT}{line}")?;
    }
    writeln!(out, "{HORIZONTAL_RULE}")?;
    writeln!(out)
}
