//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the prompt-notes data directory
/// - macOS: ~/Library/Application Support/prompt-notes/
/// - Linux: ~/.local/share/prompt-notes/
/// - Windows: %APPDATA%/prompt-notes/
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join("prompt-notes"))
}

/// Path of the SQLite database holding every note collection
pub fn notes_db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("notes.db"))
}

/// Path of the sign-in profile file
pub fn profile_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("profile.json"))
}
