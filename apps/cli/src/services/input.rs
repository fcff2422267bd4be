use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads a roster from `path`, or from standard input when the path is `-`.
///
/// # Errors
/// Returns an error if the file or stdin cannot be read as UTF-8.
pub fn read_roster(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("Failed to read roster from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read roster {}", path.display()))
}
