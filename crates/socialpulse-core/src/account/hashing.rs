//! Password hashing strategies.
//!
//! Plaintext passwords are never persisted. The store runs every password
//! through a [`HashingStrategy`] that produces a salted, one-way digest;
//! the salt and cost factor are embedded in the digest itself so
//! verification needs no side table.

use tracing::debug;

/// Error type for hashing operations.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The underlying bcrypt operation failed.
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Result type for hashing operations.
pub type HashResult<T> = std::result::Result<T, HashError>;

/// A pluggable one-way password hashing capability.
///
/// Implementations must generate a fresh random salt for every call to
/// [`hash`](HashingStrategy::hash), so two accounts with the same password
/// never share a digest.
pub trait HashingStrategy: Send + Sync {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns an error if the hashing operation itself fails.
    fn hash(&self, plaintext: &str) -> HashResult<String>;

    /// Check a plaintext password against a stored digest.
    ///
    /// A malformed digest counts as a mismatch, never an error: callers
    /// treat verification failure as a normal false outcome.
    fn verify(&self, plaintext: &str, digest: &str) -> bool;

    /// Do a verification-equivalent amount of work with no stored digest.
    ///
    /// Called on the unknown-username path so it costs the same as a
    /// wrong-password check. Implementations must match the work factor
    /// their own digests carry.
    fn burn(&self, plaintext: &str) {
        let _ = self.verify(plaintext, DUMMY_DIGEST);
    }
}

/// A syntactically valid digest that matches no account password.
///
/// Verification against an unknown username burns a check against this
/// digest so the response time is comparable to a wrong-password check
/// (no username-enumeration oracle).
pub(crate) const DUMMY_DIGEST: &str =
    "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// Adaptive bcrypt hashing with a configurable cost factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with an explicit cost factor.
    ///
    /// Costs below bcrypt's minimum of 4 are only useful in tests.
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The interactive-latency default (cost 12).
    #[must_use]
    pub const fn interactive() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::interactive()
    }
}

impl HashingStrategy for BcryptHasher {
    fn hash(&self, plaintext: &str) -> HashResult<String> {
        let digest = bcrypt::hash(plaintext, self.cost)?;
        debug!(cost = self.cost, "hashed password");
        Ok(digest)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }

    fn burn(&self, plaintext: &str) {
        // Hashing at our own cost does the same work as verifying a digest
        // we produced, whatever the configured cost.
        let _ = bcrypt::hash(plaintext, self.cost);
    }
}
