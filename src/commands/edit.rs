//! Edit command - Modify an existing note through the draft slot

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;

use super::utils;
use crate::app::App;
use crate::auth::IdentityProvider;
use crate::notes::{NoteStore, PromptField};

/// Options for the edit command
pub struct EditOptions {
    /// New note title
    pub title: Option<String>,
    /// Prompt contents to append
    pub add: Vec<String>,
    /// Prompt reference -> new title
    pub retitle: Vec<(String, String)>,
    /// Prompt reference -> new content
    pub set: Vec<(String, String)>,
    /// Prompt references to delete
    pub remove: Vec<String>,
    /// Discard the draft instead of saving it
    pub dry_run: bool,
}

/// Load a note into the draft, apply the edits, and commit (or discard)
pub fn execute<P: IdentityProvider>(
    app: &mut App<P>,
    reference: &str,
    options: EditOptions,
) -> Result<()> {
    let note_id = utils::resolve_note(app.store().notes(), reference)?.id.clone();

    let store = app.store_mut();
    if store.edit(&note_id).is_none() {
        bail!("No note matches: {}", reference);
    }

    if let Some(title) = &options.title {
        store.set_draft_title(title);
    }

    for content in &options.add {
        let Some(id) = store.add_prompt().map(|p| p.id.clone()) else {
            bail!("No active draft");
        };
        store.update_prompt(&id, PromptField::Content, content);
    }

    for (prompt_ref, title) in &options.retitle {
        let id = draft_prompt_id(store, prompt_ref)?;
        store.update_prompt(&id, PromptField::Title, title);
    }

    for (prompt_ref, content) in &options.set {
        let id = draft_prompt_id(store, prompt_ref)?;
        store.update_prompt(&id, PromptField::Content, content);
    }

    for prompt_ref in &options.remove {
        let id = draft_prompt_id(store, prompt_ref)?;
        store.remove_prompt(&id);
    }

    if options.dry_run {
        if let Some(draft) = store.draft() {
            println!("Would save:");
            println!("{}", super::show::format_note(draft));
        }
        store.cancel();
        return Ok(());
    }

    store.save_draft().context("Failed to save note")?;
    println!("{} {}", "Saved:".green(), note_id);
    Ok(())
}

/// Resolve a prompt reference against the active draft
fn draft_prompt_id(store: &NoteStore, reference: &str) -> Result<String> {
    let Some(draft) = store.draft() else {
        bail!("No active draft");
    };
    Ok(utils::resolve_prompt(draft, reference)?.id.clone())
}
