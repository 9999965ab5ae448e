//! `login`, `register`, and `logout` commands.

use crate::session::Session;

/// Signs in with the mock presence check.
///
/// # Errors
///
/// Relays [`crate::session::AuthError`] messages, including the case
/// where either argument was left off the command line.
pub fn login(session: &mut Session, email: &str, password: &str) -> Result<String, String> {
    session
        .sign_in(email, password)
        .map_err(|e| e.to_string())?;
    Ok(format!("Welcome, {email}!", email = email.trim()))
}

/// Validates a registration. A success does not sign the user in; it
/// points them back at `login`.
///
/// # Errors
///
/// Relays [`crate::session::AuthError`] messages.
pub fn register(email: &str, password: &str, confirm: &str) -> Result<String, String> {
    Session::register(email, password, confirm).map_err(|e| e.to_string())?;
    Ok("Registered. Use `login` to sign in.".to_string())
}

/// Signs out, or says there was nobody to sign out.
pub fn logout(session: &mut Session) -> String {
    if session.signed_in() {
        session.sign_out();
        "Signed out.".to_string()
    } else {
        "Not signed in.".to_string()
    }
}
