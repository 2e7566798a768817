//! Identity providers
//!
//! The session component only knows the [`IdentityProvider`] trait. The
//! shipped implementation keeps a sign-in profile on disk and derives a
//! stable uid from the profile's email, so the same person always lands on
//! the same storage key.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A signed-in user as reported by an identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Short display form: first name if present, else email, else uid
    pub fn short_name(&self) -> &str {
        if let Some(name) = self.display_name.as_deref() {
            if let Some(first) = name.split_whitespace().next() {
                return first;
            }
        }
        self.email.as_deref().unwrap_or(&self.uid)
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("sign-in was aborted")]
    Aborted,
    #[error("stored profile is not valid: {0}")]
    InvalidProfile(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Source of the current user identity
///
/// Every call is fallible; the session component is responsible for
/// absorbing failures.
pub trait IdentityProvider {
    /// The currently signed-in user, if any
    fn current_user(&self) -> Result<Option<User>, AuthError>;

    /// Run the provider's interactive sign-in flow
    fn sign_in(&mut self) -> Result<User, AuthError>;

    /// Sign the current user out
    fn sign_out(&mut self) -> Result<(), AuthError>;
}

/// Stored sign-in profile
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Profile {
    display_name: Option<String>,
    email: String,
}

/// Identity provider backed by a local profile file
///
/// Sign-in prompts on stdin for any field not supplied up front and writes
/// the profile as JSON; sign-out removes the file.
pub struct ProfileProvider {
    path: PathBuf,
    requested_name: Option<String>,
    requested_email: Option<String>,
}

impl ProfileProvider {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            requested_name: None,
            requested_email: None,
        }
    }

    /// Pre-fill identity fields for the next sign-in instead of prompting
    pub fn with_identity(mut self, name: Option<String>, email: Option<String>) -> Self {
        self.requested_name = name;
        self.requested_email = email;
        self
    }

    /// Stable uid for an email address (case and whitespace insensitive)
    fn uid_for_email(email: &str) -> String {
        let normalized = email.trim().to_lowercase();
        format!("{:x}", md5::compute(normalized.as_bytes()))
    }

    fn read_profile(&self) -> Result<Option<Profile>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn prompt_line(label: &str) -> Result<String, AuthError> {
        print!("{}: ", label);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

impl IdentityProvider for ProfileProvider {
    fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.read_profile()?.map(|profile| User {
            uid: Self::uid_for_email(&profile.email),
            display_name: profile.display_name,
            email: Some(profile.email),
        }))
    }

    fn sign_in(&mut self) -> Result<User, AuthError> {
        let email = match self.requested_email.take() {
            Some(email) => email,
            None => Self::prompt_line("Email")?,
        };
        if email.trim().is_empty() {
            return Err(AuthError::Aborted);
        }

        let display_name = match self.requested_name.take() {
            Some(name) => Some(name),
            None => {
                let name = Self::prompt_line("Display name (optional)")?;
                if name.is_empty() {
                    None
                } else {
                    Some(name)
                }
            }
        };

        let profile = Profile {
            display_name,
            email,
        };
        let raw = serde_json::to_string_pretty(&profile)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;

        Ok(User {
            uid: Self::uid_for_email(&profile.email),
            display_name: profile.display_name,
            email: Some(profile.email),
        })
    }

    fn sign_out(&mut self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
