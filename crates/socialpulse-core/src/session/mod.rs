//! Session gate module.
//!
//! Turns raw form submissions into either a mutated [`Session`] or a
//! user-facing reason for rejection. Pure validation and delegation; all
//! hashing and storage lives in the account module.

mod gate;
mod model;
mod validation;

pub use gate::{RejectReason, SessionGate, SubmissionOutcome};
pub use model::Session;
pub use validation::{ValidationError, validate_login, validate_registration};
