//! Shared utilities for commands

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::notes::{Note, Prompt};

/// Resolve a note reference against the collection
///
/// Accepts a full id, an unambiguous id prefix, or an exact title match.
pub fn resolve_note<'a>(notes: &'a [Note], reference: &str) -> Result<&'a Note> {
    if let Some(note) = notes.iter().find(|n| n.id == reference) {
        return Ok(note);
    }

    let by_prefix: Vec<&Note> = notes
        .iter()
        .filter(|n| n.id.starts_with(reference))
        .collect();
    match by_prefix.as_slice() {
        [only] => return Ok(*only),
        [] => {}
        _ => bail!("Note reference is ambiguous: {}", reference),
    }

    let by_title: Vec<&Note> = notes.iter().filter(|n| n.title == reference).collect();
    match by_title.as_slice() {
        [only] => Ok(*only),
        [] => bail!("No note matches: {}", reference),
        _ => bail!("Several notes share that title, use an id: {}", reference),
    }
}

/// Resolve a prompt reference within a note
///
/// Accepts a full id, a 1-based position, an unambiguous id prefix, or an
/// exact prompt title. An exact id wins over a position so that all-digit
/// ids from imported documents stay addressable.
pub fn resolve_prompt<'a>(note: &'a Note, reference: &str) -> Result<&'a Prompt> {
    if let Some(prompt) = note.prompts.iter().find(|p| p.id == reference) {
        return Ok(prompt);
    }

    if let Ok(position) = reference.parse::<usize>() {
        if position >= 1 && position <= note.prompts.len() {
            return Ok(&note.prompts[position - 1]);
        }
        bail!("Note has no prompt at position {}", position);
    }

    let by_prefix: Vec<&Prompt> = note
        .prompts
        .iter()
        .filter(|p| p.id.starts_with(reference))
        .collect();
    match by_prefix.as_slice() {
        [only] => return Ok(*only),
        [] => {}
        _ => bail!("Prompt reference is ambiguous: {}", reference),
    }

    let by_title: Vec<&Prompt> = note.prompts.iter().filter(|p| p.title == reference).collect();
    match by_title.as_slice() {
        [only] => Ok(*only),
        [] => bail!("No prompt matches: {}", reference),
        _ => bail!("Several prompts share that title, use an id: {}", reference),
    }
}

/// Format a timestamp for display
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
