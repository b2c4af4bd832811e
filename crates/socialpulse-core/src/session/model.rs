//! Session state.

use chrono::{DateTime, Utc};

/// Ephemeral per-process authentication state.
///
/// Created unauthenticated at process start, mutated on successful login,
/// reset on sign-out, discarded when the process ends. Never persisted.
/// Handlers receive it explicitly; there is no ambient global.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Whether a user is currently signed in.
    pub authenticated: bool,
    /// Username of the signed-in user, if any.
    pub current_username: Option<String>,
    /// When the current login happened, if any.
    pub login_time: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a fresh, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session authenticated for the given user.
    pub fn sign_in(&mut self, username: &str, at: DateTime<Utc>) {
        self.authenticated = true;
        self.current_username = Some(username.to_string());
        self.login_time = Some(at);
    }

    /// Unconditionally restore the initial unauthenticated state.
    pub fn sign_out(&mut self) {
        *self = Self::new();
    }
}
