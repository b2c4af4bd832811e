//! Account management module.
//!
//! Provides the credential store: durable account records, registration,
//! and password verification.

pub mod hashing;
mod model;
mod repository;

pub use hashing::{BcryptHasher, HashError, HashResult, HashingStrategy};
pub use model::{Account, AccountId};
pub use repository::AccountRepository;
