//! End-to-end tests driving the session gate against a real in-memory store.

#![allow(clippy::unwrap_used)]

use socialpulse_core::{
    AccountRepository, BcryptHasher, RejectReason, Session, SessionGate, SubmissionOutcome,
    ValidationError,
};

async fn gate() -> SessionGate {
    let repo = AccountRepository::in_memory()
        .await
        .unwrap()
        .with_hasher(Box::new(BcryptHasher::new(4)));
    SessionGate::new(repo)
}

#[tokio::test]
async fn full_register_login_logout_scenario() {
    let gate = gate().await;
    let mut session = Session::new();

    // register("alice", "Secret123", "alice@x.com") -> success
    let outcome = gate
        .register("alice", "alice@x.com", "Secret123", "Secret123")
        .await
        .unwrap();
    assert!(outcome.is_accepted());
    assert!(!session.authenticated, "registration does not log in");

    // verify("alice", "Secret123") -> true
    let outcome = gate.login(&mut session, "alice", "Secret123").await.unwrap();
    assert!(outcome.is_accepted());
    assert!(session.authenticated);
    assert_eq!(session.current_username.as_deref(), Some("alice"));

    // verify("alice", "wrong") -> false
    gate.sign_out(&mut session);
    let outcome = gate.login(&mut session, "alice", "wrong").await.unwrap();
    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected(RejectReason::InvalidCredentials)
    );
    assert!(!session.authenticated);

    // register("alice", ...) again -> duplicate username
    let outcome = gate
        .register("alice", "alice2@x.com", "Other1234", "Other1234")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected(RejectReason::UsernameTaken)
    );

    // Exactly one account exists, and the enumeration has no digest in it.
    let accounts = gate.store().list().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].username, "alice");
    assert_eq!(accounts[0].email, "alice@x.com");
}

#[tokio::test]
async fn unknown_user_and_wrong_password_look_identical() {
    let gate = gate().await;
    let mut session = Session::new();

    gate.register("alice", "alice@x.com", "Secret123", "Secret123")
        .await
        .unwrap();

    let unknown = gate
        .login(&mut session, "nonexistent", "anything")
        .await
        .unwrap();
    let wrong = gate.login(&mut session, "alice", "anything").await.unwrap();
    assert_eq!(unknown, wrong);
    assert!(!session.authenticated);
}

#[tokio::test]
async fn unknown_user_check_takes_comparable_time() {
    use std::time::{Duration, Instant};

    let gate = gate().await;
    gate.register("alice", "alice@x.com", "Secret123", "Secret123")
        .await
        .unwrap();
    let store = gate.store();

    // Warm-up so one-time query setup doesn't skew either side.
    assert!(!store.verify("alice", "wrong").await.unwrap());
    assert!(!store.verify("nonexistent", "anything").await.unwrap());

    // Take the minimum over a few runs to damp scheduler noise.
    let mut wrong_password = Duration::MAX;
    let mut unknown_user = Duration::MAX;
    for _ in 0..3 {
        let start = Instant::now();
        assert!(!store.verify("alice", "wrong").await.unwrap());
        wrong_password = wrong_password.min(start.elapsed());

        let start = Instant::now();
        assert!(!store.verify("nonexistent", "anything").await.unwrap());
        unknown_user = unknown_user.min(start.elapsed());
    }

    // Coarse bound on purpose: both paths do one bcrypt check at the same
    // cost, so they must stay within an order of magnitude of each other.
    assert!(
        unknown_user < wrong_password * 10,
        "unknown-user check too slow: {unknown_user:?} vs {wrong_password:?}"
    );
    assert!(
        wrong_password < unknown_user * 10,
        "wrong-password check too slow: {wrong_password:?} vs {unknown_user:?}"
    );
}

#[tokio::test]
async fn registration_validation_matrix() {
    let gate = gate().await;

    let cases = [
        (
            ("", "a@b.com", "abc12345", "abc12345"),
            ValidationError::MissingFields,
        ),
        (
            ("user", "a@b.com", "short7!", "short7!"),
            ValidationError::PasswordTooShort,
        ),
        (
            ("user", "a@b.com", "abc12345", "abc12346"),
            ValidationError::PasswordMismatch,
        ),
        (
            ("user", "not-an-email", "abc12345", "abc12345"),
            ValidationError::InvalidEmail,
        ),
    ];

    for ((username, email, password, confirm), expected) in cases {
        let outcome = gate
            .register(username, email, password, confirm)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected(RejectReason::Validation(expected)),
            "case: {username:?}/{email:?}/{password:?}/{confirm:?}"
        );
    }

    // Nothing above may have reached storage.
    assert!(gate.store().list().await.unwrap().is_empty());

    // Boundary: exactly 8 characters is accepted.
    let outcome = gate
        .register("user", "a@b.com", "exactly8", "exactly8")
        .await
        .unwrap();
    assert!(outcome.is_accepted());
}

#[tokio::test]
async fn two_users_same_password_both_verify() {
    let gate = gate().await;
    let mut session = Session::new();

    gate.register("alice", "alice@x.com", "samepassword", "samepassword")
        .await
        .unwrap();
    gate.register("bob", "bob@x.com", "samepassword", "samepassword")
        .await
        .unwrap();

    assert!(gate
        .login(&mut session, "alice", "samepassword")
        .await
        .unwrap()
        .is_accepted());
    gate.sign_out(&mut session);
    assert!(gate
        .login(&mut session, "bob", "samepassword")
        .await
        .unwrap()
        .is_accepted());
    assert_eq!(session.current_username.as_deref(), Some("bob"));
}
