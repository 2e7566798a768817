//! Session and identity

pub mod provider;
pub mod session;

pub use provider::{IdentityProvider, ProfileProvider};
#[allow(unused_imports)]
pub use provider::{AuthError, User};
pub use session::Session;
