//! prompt-notes library
//!
//! Core functionality for organizing reusable AI prompts into named notes.
//! Each note is an ordered list of title/content prompt entries; the whole
//! collection persists in a local key-value store under a key derived from
//! the signed-in identity (with a shared fallback key when signed out).

pub mod app;
pub mod auth;
pub mod commands;
pub mod config;
pub mod notes;
