//! Local key-value storage
//!
//! The persistence primitive: a SQLite database with a single item table,
//! one row per identity-derived key. Every read or write is a single SQL
//! statement, so a value is always replaced whole — there are no partial
//! writes to recover from.

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use std::fs;
use std::path::Path;

/// Namespace prefix shared by all note collection keys
pub const STORAGE_NAMESPACE: &str = "ai-prompt-notes";

/// Derive the storage key for a user id, or the fallback key when signed out
///
/// # Example
/// ```
/// use prompt_notes::notes::storage_key;
///
/// assert_eq!(storage_key(None), "ai-prompt-notes");
/// assert_eq!(storage_key(Some("u1")), "ai-prompt-notes-u1");
/// ```
pub fn storage_key(uid: Option<&str>) -> String {
    match uid {
        Some(uid) => format!("{}-{}", STORAGE_NAMESPACE, uid),
        None => STORAGE_NAMESPACE.to_string(),
    }
}

/// A string key-value store backed by SQLite
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open (or create) the store at the given database path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        Self::init(conn)
    }

    /// Open an ephemeral in-memory store
    #[allow(dead_code)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory store")?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS item (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )
        .context("Failed to initialize item table")?;
        Ok(Self { conn })
    }

    /// Read the value stored under a key, if any
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM item WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("Failed to read key: {}", key))
    }

    /// Replace the value stored under a key
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO item (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                [key, value],
            )
            .with_context(|| format!("Failed to write key: {}", key))?;
        Ok(())
    }

    /// Delete the value stored under a key, if any
    #[allow(dead_code)]
    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM item WHERE key = ?1", [key])
            .with_context(|| format!("Failed to remove key: {}", key))?;
        Ok(())
    }
}
