//! CLI commands

pub mod copy;
pub mod edit;
pub mod list;
pub mod login;
pub mod new;
pub mod show;
pub mod utils;
