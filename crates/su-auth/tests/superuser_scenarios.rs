//! End-to-end scenarios for the superuser provider.
//!
//! These tests verify:
//! 1. Acceptance and rejection against the configured password
//! 2. Which attempts reach the audit plugin
//! 3. The one-time warning when the audit plugin is missing
//! 4. Fall-through from other providers in a host chain

mod helpers;

use std::sync::Arc;

use helpers::{Fixture, SECRET, WarnCounter};
use su_audit::Outcome;
use su_auth::config::{LOG_LOGINS_KEY, PASSWORD_KEY};
use su_auth::{AuditBindingState, AuthError, AuthProvider, ProviderChain};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn missing_audit_plugin_accepts_and_warns_once() {
    let fixture = Fixture::new(false, true);
    let counter = WarnCounter::default();

    tracing::dispatcher::with_default(&counter.dispatch(), || {
        for _ in 0..5 {
            fixture.provider.authenticate("alice", SECRET).expect("accepted");
        }
    });

    assert!(fixture.sink.is_empty());
    assert_eq!(counter.count(), 1);
    assert!(fixture.binding.has_warned());
    assert_eq!(fixture.registry.lookups(), 5);
}

#[test]
fn success_not_audited_when_logging_disabled() {
    let fixture = Fixture::new(true, false);

    fixture.provider.authenticate("bob", SECRET).expect("accepted");

    assert!(fixture.sink.is_empty());
    assert_eq!(fixture.binding.state(), AuditBindingState::Resolved);
}

#[test]
fn wrong_password_rejected_and_audited() {
    let fixture = Fixture::new(true, false);

    let err = fixture.provider.authenticate("eve", "wrong").expect_err("rejected");
    assert!(matches!(err, AuthError::Unauthorized { .. }));

    let events = fixture.sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].username, "eve");
    assert_eq!(events[0].outcome, Outcome::Failure);
}

#[test]
fn success_audited_when_logging_enabled() {
    let fixture = Fixture::new(true, true);

    for user in ["alice", "bob", "carol"] {
        fixture.provider.authenticate(user, SECRET).expect("accepted");
    }

    let events = fixture.sink.events();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.outcome == Outcome::Success));
    let users: Vec<_> = events.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(users, ["alice", "bob", "carol"]);
}

// ============================================================================
// Binding lifecycle
// ============================================================================

#[test]
fn plugin_looked_up_once_after_it_appears() {
    let fixture = Fixture::new(false, true);

    fixture.provider.authenticate("eve", "x").expect_err("rejected");
    fixture.provider.authenticate("eve", "y").expect_err("rejected");
    assert_eq!(fixture.registry.lookups(), 2);
    assert!(fixture.sink.is_empty());

    fixture.load_audit_plugin();
    for _ in 0..10 {
        fixture.provider.authenticate("eve", "z").expect_err("rejected");
    }

    assert_eq!(fixture.registry.lookups(), 3);
    assert_eq!(fixture.sink.len(), 10);
    assert!(fixture.binding.has_warned());
}

#[test]
fn settings_read_fresh_on_every_attempt() {
    let fixture = Fixture::new(true, false);

    fixture.provider.authenticate("bob", SECRET).expect("accepted");
    assert!(fixture.sink.is_empty());

    fixture.config.set(LOG_LOGINS_KEY, "true");
    fixture.config.set(PASSWORD_KEY, "rotated");

    assert!(fixture.provider.authenticate("bob", SECRET).is_err());
    fixture.provider.authenticate("bob", "rotated").expect("accepted");

    let outcomes: Vec<_> = fixture.sink.events().iter().map(|e| e.outcome).collect();
    assert_eq!(outcomes, [Outcome::Failure, Outcome::Success]);
}

// ============================================================================
// Host chain
// ============================================================================

/// Stand-in for a directory-backed provider that knows nobody.
struct EmptyDirectory;

impl AuthProvider for EmptyDirectory {
    fn authenticate(&self, username: &str, _password: &str) -> su_auth::Result<()> {
        Err(AuthError::UserNotFound {
            username: username.to_string(),
        })
    }

    fn authenticate_digest(&self, _: &str, _: &str, _: &str) -> su_auth::Result<()> {
        Err(AuthError::unsupported("authenticate_digest"))
    }

    fn get_password(&self, _: &str) -> su_auth::Result<String> {
        Err(AuthError::unsupported("get_password"))
    }

    fn set_password(&self, _: &str, _: &str) -> su_auth::Result<()> {
        Err(AuthError::unsupported("set_password"))
    }

    fn capabilities(&self) -> su_auth::Capabilities {
        su_auth::Capabilities::PLAIN_ONLY
    }
}

#[test]
fn chain_falls_through_to_superuser() {
    let fixture = Fixture::new(true, true);
    let chain = ProviderChain::new()
        .with("directory", Arc::new(EmptyDirectory))
        .with("superuser", Arc::new(fixture.provider));

    assert_eq!(chain.authenticate_with("alice", SECRET).expect("accepted"), "superuser");
    assert!(chain.authenticate("alice", "nope").expect_err("rejected").is_unauthorized());
    assert_eq!(fixture.sink.len(), 2);
}

#[test]
fn chain_surfaces_audit_failure() {
    let fixture = Fixture::new(false, true);
    fixture
        .registry
        .inner
        .register(helpers::AUDIT_PLUGIN, Arc::new(su_audit::MemoryAuditSink::bounded(0)));
    let chain = ProviderChain::new().with("superuser", Arc::new(fixture.provider));

    let err = chain.authenticate("eve", "wrong").expect_err("audit failure");
    assert!(matches!(err, AuthError::Audit(_)));
}
