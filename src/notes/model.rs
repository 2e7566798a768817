//! Note and prompt data model
//!
//! A Note is a named, ordered collection of Prompts. The serialized form is
//! a JSON array of notes with camelCase field names and RFC 3339 timestamp
//! strings, which is exactly what gets stored under each identity key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single reusable prompt: a titled block of text owned by one note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Prompt {
    /// Create an empty prompt with a fresh identifier
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            content: String::new(),
            created_at: Utc::now(),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Which editable field of a prompt to update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Title,
    Content,
}

/// A named collection of prompts with creation/update timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub prompts: Vec<Prompt>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create an empty note with a fresh identifier and current timestamps
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            prompts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
