//! Core note operations: data model, storage primitive, and the store

pub mod model;
pub mod storage;
pub mod store;

// Re-exports for library consumers
pub use model::{Note, Prompt, PromptField};
pub use storage::{storage_key, LocalStore};
#[allow(unused_imports)]
pub use storage::STORAGE_NAMESPACE;
pub use store::NoteStore;
