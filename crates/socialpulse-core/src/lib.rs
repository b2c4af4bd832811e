//! # socialpulse-core
//!
//! Core logic for the `SocialPulse` analytics dashboard.
//!
//! This crate provides:
//! - **Credential Store** - `SQLite`-backed account registration and
//!   verification with salted adaptive password hashing
//! - **Session Gate** - form validation and session state transitions for
//!   login, registration, and sign-out
//! - **Sample Metrics** - the static datasets rendered by the dashboard
//!
//! The UI layer (page rendering, charts, styling) lives outside this crate
//! and consumes it only through the types re-exported here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
mod error;
pub mod metrics;
pub mod session;

pub use account::hashing::{BcryptHasher, HashError, HashResult, HashingStrategy};
pub use account::{Account, AccountId, AccountRepository};
pub use error::{Error, Result};
pub use metrics::{
    ActivityEntry, EngagementLevel, FollowerPoint, MetricCard, PlatformShare, Trend,
    follower_growth, overview_cards, platform_engagement, recent_activity,
};
pub use session::{
    RejectReason, Session, SessionGate, SubmissionOutcome, ValidationError, validate_login,
    validate_registration,
};
