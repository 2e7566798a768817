//! Note store
//!
//! Owns the in-memory note collection and the single transient draft,
//! and loads/saves the whole collection under one identity-derived key.
//! Saving always writes the complete snapshot for the active key.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::error;

use super::model::{Note, Prompt, PromptField};
use super::storage::{storage_key, LocalStore};

pub struct NoteStore {
    store: LocalStore,
    key: String,
    notes: Vec<Note>,
    draft: Option<Note>,
}

impl NoteStore {
    /// Open the store for the given user id (`None` = signed out)
    pub fn open(store: LocalStore, uid: Option<&str>) -> Self {
        let mut s = Self {
            store,
            key: storage_key(uid),
            notes: Vec::new(),
            draft: None,
        };
        s.reload();
        s
    }

    /// Point the store at a different identity and reload from its key
    ///
    /// A key with no saved value resets the collection to empty. A value
    /// that fails to parse is logged and leaves the collection as it was.
    /// The two cases are intentionally not unified.
    pub fn switch_user(&mut self, uid: Option<&str>) {
        self.key = storage_key(uid);
        self.reload();
    }

    fn reload(&mut self) {
        let saved = match self.store.get(&self.key) {
            Ok(saved) => saved,
            Err(err) => {
                error!("Error loading saved notes: {:#}", err);
                return;
            }
        };

        match saved {
            Some(raw) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => self.notes = notes,
                Err(err) => {
                    // Stale-but-valid data beats crashing: the collection
                    // keeps its previous contents.
                    error!("Error parsing saved notes: {}", err);
                }
            },
            // Nothing stored under this key: never carry over another
            // identity's notes.
            None => self.notes.clear(),
        }
    }

    /// The active storage key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All notes in the active collection, in saved order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The transient note being created or edited, if any
    pub fn draft(&self) -> Option<&Note> {
        self.draft.as_ref()
    }

    /// Start a fresh empty draft (not yet part of the collection)
    pub fn create_draft(&mut self) -> &Note {
        self.draft.insert(Note::new())
    }

    /// Load an existing note into the draft slot as a copy
    pub fn edit(&mut self, id: &str) -> Option<&Note> {
        let note = self.notes.iter().find(|n| n.id == id)?.clone();
        Some(&*self.draft.insert(note))
    }

    /// Commit a note: replace the entry with the same id (stamping
    /// `updated_at`) or append it, then write the whole collection back to
    /// the active key. The draft slot is cleared either way.
    pub fn save(&mut self, mut note: Note) -> Result<()> {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => {
                note.updated_at = Utc::now();
                *existing = note;
            }
            None => self.notes.push(note),
        }
        self.persist()?;
        self.draft = None;
        Ok(())
    }

    /// Commit the active draft, if any, stamping its `updated_at`
    pub fn save_draft(&mut self) -> Result<()> {
        let Some(mut draft) = self.draft.take() else {
            return Ok(());
        };
        draft.updated_at = Utc::now();
        self.save(draft)
    }

    /// Discard the draft without touching the collection or storage
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Set the draft's note title; false when there is no draft
    pub fn set_draft_title(&mut self, title: &str) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        draft.title = title.to_string();
        true
    }

    /// Append a fresh empty prompt to the draft
    pub fn add_prompt(&mut self) -> Option<&Prompt> {
        let draft = self.draft.as_mut()?;
        draft.prompts.push(Prompt::new());
        draft.prompts.last()
    }

    /// Update one field of a draft prompt, matched by id
    pub fn update_prompt(&mut self, id: &str, field: PromptField, value: &str) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        let Some(prompt) = draft.prompts.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        match field {
            PromptField::Title => prompt.title = value.to_string(),
            PromptField::Content => prompt.content = value.to_string(),
        }
        true
    }

    /// Remove a draft prompt by id; false when nothing matched
    pub fn remove_prompt(&mut self, id: &str) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        let before = draft.prompts.len();
        draft.prompts.retain(|p| p.id != id);
        draft.prompts.len() != before
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes).context("Failed to serialize notes")?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn db_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("notes.db")
    }

    fn open_store(dir: &tempfile::TempDir, uid: Option<&str>) -> NoteStore {
        let store = LocalStore::open(db_path(dir)).unwrap();
        NoteStore::open(store, uid)
    }

    #[test]
    fn test_saved_draft_reads_back_under_fallback_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.set_draft_title("Writing helpers");
        let id = store.add_prompt().map(|p| p.id.clone()).unwrap();
        store.update_prompt(&id, PromptField::Content, "Summarize this text");
        store.save_draft().unwrap();

        // Read the raw value back through a second connection
        let raw_store = LocalStore::open(db_path(&dir)).unwrap();
        let raw = raw_store.get("ai-prompt-notes").unwrap().unwrap();
        let notes: Vec<Note> = serde_json::from_str(&raw).unwrap();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].prompts.len(), 1);
        assert_eq!(notes[0].prompts[0].content, "Summarize this text");
    }

    #[test]
    fn test_saving_twice_keeps_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.set_draft_title("first");
        let draft = store.draft().unwrap().clone();
        store.save(draft.clone()).unwrap();

        let created_at = store.notes()[0].created_at;
        let first_updated = store.notes()[0].updated_at;

        let mut edited = draft;
        edited.title = "second".to_string();
        store.save(edited).unwrap();

        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].title, "second");
        assert_eq!(store.notes()[0].created_at, created_at);
        assert!(store.notes()[0].updated_at >= first_updated);
    }

    #[test]
    fn test_switch_to_identity_without_data_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.set_draft_title("signed-out note");
        store.save_draft().unwrap();
        assert_eq!(store.notes().len(), 1);

        // The new key has nothing saved: the previous identity's notes
        // must never leak through.
        store.switch_user(Some("u1"));
        assert!(store.notes().is_empty());

        store.switch_user(None);
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].title, "signed-out note");
    }

    #[test]
    fn test_collections_stay_separated_per_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, Some("u1"));

        store.create_draft();
        store.set_draft_title("u1 note");
        store.save_draft().unwrap();

        store.switch_user(Some("u2"));
        assert!(store.notes().is_empty());
        store.create_draft();
        store.set_draft_title("u2 note");
        store.save_draft().unwrap();

        store.switch_user(Some("u1"));
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].title, "u1 note");
    }

    #[test]
    fn test_corrupt_value_keeps_previous_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.set_draft_title("keep me");
        store.save_draft().unwrap();

        // Plant a corrupt value under the next identity's key
        let raw_store = LocalStore::open(db_path(&dir)).unwrap();
        raw_store.set("ai-prompt-notes-u1", "not json").unwrap();

        // Parse failure leaves the in-memory collection as it was, unlike
        // the absent-key case which would have cleared it.
        store.switch_user(Some("u1"));
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].title, "keep me");
    }

    #[test]
    fn test_round_trip_preserves_content_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.set_draft_title("Review prompts");
        let id = store.add_prompt().map(|p| p.id.clone()).unwrap();
        store.update_prompt(&id, PromptField::Title, "Code review");
        store.update_prompt(&id, PromptField::Content, "Review this diff for bugs");
        store.save_draft().unwrap();

        let saved = store.notes().to_vec();
        drop(store);

        let reloaded = open_store(&dir, None);
        assert_eq!(reloaded.notes(), saved.as_slice());
    }

    #[test]
    fn test_add_then_remove_prompt_restores_draft() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.add_prompt();
        store.add_prompt();
        let before = store.draft().unwrap().prompts.clone();

        let extra = store.add_prompt().map(|p| p.id.clone()).unwrap();
        assert!(store.remove_prompt(&extra));

        assert_eq!(store.draft().unwrap().prompts, before);
    }

    #[test]
    fn test_cancel_discards_draft_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.add_prompt();
        store.cancel();

        assert!(store.draft().is_none());
        assert!(store.notes().is_empty());

        let raw_store = LocalStore::open(db_path(&dir)).unwrap();
        assert!(raw_store.get("ai-prompt-notes").unwrap().is_none());
    }

    #[test]
    fn test_edit_loads_copy_and_save_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.set_draft_title("original");
        store.save_draft().unwrap();
        let id = store.notes()[0].id.clone();

        assert!(store.edit(&id).is_some());
        store.set_draft_title("renamed");

        // Collection untouched until the draft is committed
        assert_eq!(store.notes()[0].title, "original");

        store.save_draft().unwrap();
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].title, "renamed");
    }

    #[test]
    fn test_draft_operations_without_draft_are_noops() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        assert!(store.add_prompt().is_none());
        assert!(!store.set_draft_title("x"));
        assert!(!store.update_prompt("missing", PromptField::Title, "x"));
        assert!(!store.remove_prompt("missing"));
        store.save_draft().unwrap();
        assert!(store.notes().is_empty());
    }

    #[test]
    fn test_update_prompt_with_unknown_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir, None);

        store.create_draft();
        store.add_prompt();
        assert!(!store.update_prompt("nope", PromptField::Content, "x"));
        assert!(!store.remove_prompt("nope"));
        assert_eq!(store.draft().unwrap().prompts.len(), 1);
    }
}
