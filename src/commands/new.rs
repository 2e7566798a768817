//! New command - Create a note from a fresh draft

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;

use crate::app::App;
use crate::auth::IdentityProvider;
use crate::notes::PromptField;

/// Options for the new command
pub struct NewOptions {
    /// Note title
    pub title: Option<String>,
    /// Prompt contents to add, in order
    pub prompts: Vec<String>,
}

/// Build a draft from the options and commit it
pub fn execute<P: IdentityProvider>(app: &mut App<P>, options: NewOptions) -> Result<()> {
    let store = app.store_mut();
    store.create_draft();

    if let Some(title) = &options.title {
        store.set_draft_title(title);
    }

    for content in &options.prompts {
        let Some(id) = store.add_prompt().map(|p| p.id.clone()) else {
            bail!("No active draft");
        };
        store.update_prompt(&id, PromptField::Content, content);
    }

    let Some(note_id) = store.draft().map(|d| d.id.clone()) else {
        bail!("No active draft");
    };
    store.save_draft().context("Failed to save note")?;

    println!("{} {}", "Created:".green(), note_id);
    Ok(())
}
