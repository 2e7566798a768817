//! Login commands - Sign in, sign out, and show the current session

use owo_colors::OwoColorize;

use crate::app::App;
use crate::auth::IdentityProvider;

/// Sign in and report the active storage key
pub fn sign_in<P: IdentityProvider>(app: &mut App<P>) {
    app.sign_in();
    match app.session().user() {
        Some(user) => {
            println!("{} {}", "Signed in as".green(), user.short_name());
            println!("Notes now load from key: {}", app.store().key());
        }
        None => {
            println!(
                "{}",
                "Sign in failed; still using the shared local collection".yellow()
            );
        }
    }
}

/// Sign out and report which collection is now active
pub fn sign_out<P: IdentityProvider>(app: &mut App<P>) {
    app.sign_out();
    match app.session().user() {
        Some(user) => {
            // Provider refused the sign-out; it stays the source of truth
            println!(
                "{} still signed in as {}",
                "Sign out failed:".yellow(),
                user.short_name()
            );
        }
        None => {
            println!("Signed out");
            println!("Notes now load from key: {}", app.store().key());
        }
    }
}

/// Describe the current session and active collection
pub fn whoami<P: IdentityProvider>(app: &App<P>) -> String {
    let mut lines = vec![];

    if app.session().is_loading() {
        lines.push("Session: resolving...".to_string());
    }

    match app.session().user() {
        Some(user) => {
            lines.push(format!("Signed in as: {}", user.short_name()));
            if let Some(email) = &user.email {
                lines.push(format!("Email: {}", email));
            }
            lines.push(format!("Uid: {}", user.uid));
        }
        None => {
            lines.push("Not signed in (using the shared local collection)".to_string());
        }
    }

    lines.push(format!("Storage key: {}", app.store().key()));
    lines.push(format!("Notes: {}", app.store().notes().len()));

    lines.join("\n")
}
