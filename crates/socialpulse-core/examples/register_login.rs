#![allow(clippy::expect_used, clippy::uninlined_format_args)]
//! Example: register an account and log in through the session gate.
//!
//! Uses an in-memory database so it leaves nothing behind.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run --package socialpulse-core --example register_login
//! ```

use socialpulse_core::{AccountRepository, Session, SessionGate, SubmissionOutcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let repo = AccountRepository::in_memory().await?;
    let gate = SessionGate::new(repo);
    let mut session = Session::new();

    match gate
        .register("alice", "alice@example.com", "Secret123", "Secret123")
        .await?
    {
        SubmissionOutcome::Accepted => println!("Account created successfully! Please sign in."),
        SubmissionOutcome::Rejected(reason) => println!("Registration failed: {reason}"),
    }

    // A typo first, then the real password.
    for password in ["Secret124", "Secret123"] {
        match gate.login(&mut session, "alice", password).await? {
            SubmissionOutcome::Accepted => {
                println!(
                    "Welcome back, {}! (logged in at {})",
                    session.current_username.as_deref().unwrap_or("?"),
                    session.login_time.map(|t| t.to_rfc3339()).unwrap_or_default()
                );
            }
            SubmissionOutcome::Rejected(reason) => println!("Login failed: {reason}"),
        }
    }

    gate.sign_out(&mut session);
    println!("Signed out, authenticated = {}", session.authenticated);

    Ok(())
}
