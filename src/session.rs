//! Mock sign-in state owned by the application shell.
//!
//! This mirrors a demo login flow: fields must be present and passwords
//! must match on registration, but nothing is checked against a backend
//! and nothing is persisted. The task store never looks at any of this;
//! gating of task commands is purely a shell concern.

use thiserror::Error;

/// Why a sign-in or registration attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A required field was blank.
    #[error("all fields are required")]
    MissingField,
    /// The two passwords on the registration form differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Signed-in/signed-out flag, with the email kept for greetings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    email: Option<String>,
}

impl Session {
    /// A session that starts signed out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that starts already signed in, for startup shortcuts
    /// that skip the mock login.
    #[must_use]
    pub fn signed_in_as(email: &str) -> Self {
        Self {
            email: Some(email.trim().to_string()),
        }
    }

    /// True while a user is signed in.
    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.email.is_some()
    }

    /// The signed-in email, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Signs in with the mock check: both fields non-blank.
    ///
    /// Any non-blank pair is accepted; the password is checked for
    /// presence only and then dropped.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingField`] when either field is blank.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingField);
        }
        self.email = Some(email.to_string());
        Ok(())
    }

    /// Validates a registration: all fields present, passwords equal.
    ///
    /// Registration never signs the user in; a successful attempt hands
    /// control back to the login step.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingField`] when any field is blank and
    /// [`AuthError::PasswordMismatch`] when the passwords differ.
    pub fn register(email: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() || password.trim().is_empty() || confirm.trim().is_empty() {
            return Err(AuthError::MissingField);
        }
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }

    /// Signs out. Harmless when already signed out.
    pub fn sign_out(&mut self) {
        self.email = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_signed_out() {
        let session = Session::new();
        assert!(!session.signed_in());
        assert_eq!(session.email(), None);
    }

    #[test]
    fn sign_in_accepts_any_non_blank_pair() {
        let mut session = Session::new();
        session.sign_in("ana@example.com", "hunter2").unwrap();
        assert!(session.signed_in());
        assert_eq!(session.email(), Some("ana@example.com"));
    }

    #[test]
    fn sign_in_trims_the_email() {
        let mut session = Session::new();
        session.sign_in("  ana@example.com  ", "pw").unwrap();
        assert_eq!(session.email(), Some("ana@example.com"));
    }

    #[test]
    fn sign_in_rejects_blank_fields() {
        let mut session = Session::new();
        assert_eq!(
            session.sign_in("", "pw").unwrap_err(),
            AuthError::MissingField
        );
        assert_eq!(
            session.sign_in("ana@example.com", "   ").unwrap_err(),
            AuthError::MissingField
        );
        assert!(!session.signed_in());
    }

    #[test]
    fn register_requires_all_fields() {
        assert_eq!(
            Session::register("", "pw", "pw").unwrap_err(),
            AuthError::MissingField
        );
        assert_eq!(
            Session::register("ana@example.com", "", "pw").unwrap_err(),
            AuthError::MissingField
        );
        assert_eq!(
            Session::register("ana@example.com", "pw", " ").unwrap_err(),
            AuthError::MissingField
        );
    }

    #[test]
    fn register_requires_matching_passwords() {
        assert_eq!(
            Session::register("ana@example.com", "pw1", "pw2").unwrap_err(),
            AuthError::PasswordMismatch
        );
        Session::register("ana@example.com", "pw", "pw").unwrap();
    }

    #[test]
    fn sign_out_clears_the_session() {
        let mut session = Session::signed_in_as("ana@example.com");
        assert!(session.signed_in());
        session.sign_out();
        assert!(!session.signed_in());
        session.sign_out();
        assert!(!session.signed_in());
    }
}
