//! Copy command - Emit a prompt body for clipboard piping
//!
//! There is no OS clipboard integration; the content is returned verbatim
//! so the binary can print it for piping to pbcopy/xclip/wl-copy.

use anyhow::Result;

use super::utils;
use crate::notes::Note;

/// Look up a prompt and return its raw content
pub fn execute(notes: &[Note], note_ref: &str, prompt_ref: &str) -> Result<String> {
    let note = utils::resolve_note(notes, note_ref)?;
    let prompt = utils::resolve_prompt(note, prompt_ref)?;
    Ok(prompt.content.clone())
}
