//! Application wiring
//!
//! Composes the session and the note store: whenever the session's
//! identity changes, the store reloads from the matching storage key.

use crate::auth::{IdentityProvider, Session};
use crate::notes::{LocalStore, NoteStore};

pub struct App<P: IdentityProvider> {
    session: Session<P>,
    store: NoteStore,
}

impl<P: IdentityProvider> App<P> {
    /// Resolve the session and load the note collection for its identity
    pub fn open(provider: P, storage: LocalStore) -> Self {
        let mut session = Session::new(provider);
        session.resolve();
        let store = NoteStore::open(storage, session.uid());
        Self { session, store }
    }

    /// Sign in, then switch the note collection to the new identity's key
    pub fn sign_in(&mut self) {
        self.session.sign_in();
        self.store.switch_user(self.session.uid());
    }

    /// Sign out, then switch back to the key of whoever remains (if anyone)
    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.store.switch_user(self.session.uid());
    }

    pub fn session(&self) -> &Session<P> {
        &self.session
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut NoteStore {
        &mut self.store
    }
}
