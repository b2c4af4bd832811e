//! Account model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Create a new account ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored identity record.
///
/// The password digest is deliberately not part of this type: enumeration
/// and lookup paths can never expose it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by the store at creation.
    pub id: AccountId,
    /// Unique username, case-sensitive, immutable after creation.
    pub username: String,
    /// Email address, coarsely validated at the gate, not verified.
    pub email: String,
    /// Set once at insertion.
    pub created_at: DateTime<Utc>,
}
