//! Session state
//!
//! Tracks the current user as reported by an identity provider, plus a
//! loading flag while that state is unresolved. Provider failures never
//! escape: they are logged where they happen.

use tracing::error;

use super::provider::{IdentityProvider, User};

pub struct Session<P: IdentityProvider> {
    provider: P,
    user: Option<User>,
    loading: bool,
}

impl<P: IdentityProvider> Session<P> {
    /// Create a session in the loading state; call [`Session::resolve`] to
    /// pick up the provider's current user.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            user: None,
            loading: true,
        }
    }

    /// Pull the current user from the provider and clear the loading flag
    pub fn resolve(&mut self) {
        match self.provider.current_user() {
            Ok(user) => self.user = user,
            Err(err) => {
                error!("Error resolving session state: {}", err);
                self.user = None;
            }
        }
        self.loading = false;
    }

    /// Run the provider's interactive sign-in
    ///
    /// A failure is logged and the session returns to a non-loading state
    /// with the user left as it was (unauthenticated in practice). There
    /// is no retry.
    pub fn sign_in(&mut self) {
        self.loading = true;
        match self.provider.sign_in() {
            Ok(user) => {
                self.user = Some(user);
                self.loading = false;
            }
            Err(err) => {
                error!("Sign in error: {}", err);
                self.loading = false;
            }
        }
    }

    /// Sign out via the provider
    ///
    /// A failed sign-out is logged and state is left unchanged; the
    /// provider remains the source of truth.
    pub fn sign_out(&mut self) {
        match self.provider.sign_out() {
            Ok(()) => self.user = None,
            Err(err) => error!("Sign out error: {}", err),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The uid to derive the storage key from, if signed in
    pub fn uid(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.uid.as_str())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
