//! Login/registration submission handling.

use chrono::Utc;
use tracing::{debug, warn};

use super::model::Session;
use super::validation::{ValidationError, validate_login, validate_registration};
use crate::account::AccountRepository;
use crate::{Error, Result};

/// Why a submission was rejected.
///
/// Every variant carries a short, non-technical message for display; none
/// of them leaks internal detail or distinguishes an unknown user from a
/// wrong password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The submission failed shape validation before reaching storage.
    Validation(ValidationError),
    /// Username/password pair did not verify.
    InvalidCredentials,
    /// Registration username is already taken.
    UsernameTaken,
}

impl RejectReason {
    /// Get the user-facing message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.message(),
            Self::InvalidCredentials => "Invalid username or password",
            Self::UsernameTaken => "Username already exists. Please choose another.",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Result of a single login or registration submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The submission was accepted.
    Accepted,
    /// The submission was rejected with a displayable reason.
    Rejected(RejectReason),
}

impl SubmissionOutcome {
    /// Whether the submission was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Boundary between form submissions and the credential store.
///
/// Each submission is handled synchronously and single-shot: validate the
/// shape, delegate the identity check, then either mutate the session or
/// return a reason. No retries, no partial state.
pub struct SessionGate {
    repo: AccountRepository,
}

impl SessionGate {
    /// Create a gate over the given credential store.
    #[must_use]
    pub const fn new(repo: AccountRepository) -> Self {
        Self { repo }
    }

    /// Access the underlying credential store.
    #[must_use]
    pub const fn store(&self) -> &AccountRepository {
        &self.repo
    }

    /// Handle a login submission.
    ///
    /// On acceptance the session becomes authenticated for `username` with
    /// the login time stamped; on rejection the session is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error only on infrastructure failure (storage or
    /// hashing); a failed credential check is a `Rejected` outcome.
    pub async fn login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<SubmissionOutcome> {
        if let Err(e) = validate_login(username, password) {
            return Ok(SubmissionOutcome::Rejected(RejectReason::Validation(e)));
        }

        if self.repo.verify(username, password).await? {
            session.sign_in(username, Utc::now());
            debug!("login accepted for {username}");
            Ok(SubmissionOutcome::Accepted)
        } else {
            warn!("login rejected for {username}");
            Ok(SubmissionOutcome::Rejected(RejectReason::InvalidCredentials))
        }
    }

    /// Handle a registration submission.
    ///
    /// Acceptance never mutates session state: the user still has to log
    /// in with the new credentials.
    ///
    /// # Errors
    ///
    /// Returns an error only on infrastructure failure; a duplicate
    /// username is a `Rejected` outcome.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<SubmissionOutcome> {
        if let Err(e) = validate_registration(username, email, password, confirm_password) {
            return Ok(SubmissionOutcome::Rejected(RejectReason::Validation(e)));
        }

        match self.repo.register(username, password, email).await {
            Ok(account) => {
                let id = account.id;
                debug!("registration accepted for {username} ({id})");
                Ok(SubmissionOutcome::Accepted)
            }
            Err(Error::DuplicateUsername(_)) => {
                Ok(SubmissionOutcome::Rejected(RejectReason::UsernameTaken))
            }
            Err(e) => Err(e),
        }
    }

    /// Handle a sign-out: unconditionally reset the session.
    pub fn sign_out(&self, session: &mut Session) {
        session.sign_out();
        debug!("session reset");
    }
}
