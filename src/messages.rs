//! Messages file handling.
//!
//! The file is re-read from disk at the start of every pass, so edits take
//! effect on the next pass without a reload event.

use std::fs;
use std::io;
use std::path::Path;

/// Read the messages file: one message per line, blank lines skipped,
/// order preserved.
pub fn read_messages(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
