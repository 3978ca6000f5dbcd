//! Audit sink backends.
//!
//! This module provides the [`AuditSink`] trait and the built-in sinks.

use parking_lot::Mutex;

use crate::error::{AuditError, Result};
use crate::events::{LoginAttemptEvent, Outcome};

/// Destination for login attempt records.
///
/// Implement this trait to send records to a custom audit backend. Errors
/// are returned to the caller rather than swallowed.
pub trait AuditSink: Send + Sync {
    /// Records a fully built event.
    fn record(&self, event: &LoginAttemptEvent) -> Result<()>;

    /// Records a superuser login attempt for `username`.
    fn record_login_attempt(&self, username: &str, success: bool) -> Result<()> {
        self.record(&LoginAttemptEvent::new(username, Outcome::from_success(success)))
    }
}

/// Audit sink that writes records through `tracing`.
///
/// Successful logins are emitted at `info`, failures at `warn`, both under
/// the `su_audit` target.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink {
    prefix: Option<String>,
}

impl TracingAuditSink {
    /// Creates a new tracing-based sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new tracing-based sink with a message prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl AuditSink for TracingAuditSink {
    fn record(&self, event: &LoginAttemptEvent) -> Result<()> {
        let json = event.to_json()?;
        let prefix = self.prefix.as_deref().unwrap_or("AUDIT");
        let event_id = event.event_id;
        let severity = event.severity();

        match event.outcome {
            Outcome::Success => tracing::info!(
                target: "su_audit",
                %event_id,
                username = %event.username,
                %severity,
                event_json = %json,
                "[{prefix}] superuser login succeeded"
            ),
            Outcome::Failure => tracing::warn!(
                target: "su_audit",
                %event_id,
                username = %event.username,
                %severity,
                event_json = %json,
                "[{prefix}] superuser login failed"
            ),
        }
        Ok(())
    }
}

/// Audit sink that keeps records in memory.
///
/// Optionally bounded: once `limit` records are held, further records are
/// rejected with [`AuditError::Rejected`].
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<LoginAttemptEvent>>,
    limit: Option<usize>,
}

impl MemoryAuditSink {
    /// Creates an unbounded in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that holds at most `limit` records.
    #[must_use]
    pub fn bounded(limit: usize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            limit: Some(limit),
        }
    }

    /// Returns a copy of every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<LoginAttemptEvent> {
        self.events.lock().clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drops every recorded event.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: &LoginAttemptEvent) -> Result<()> {
        let mut events = self.events.lock();
        if let Some(limit) = self.limit {
            if events.len() >= limit {
                return Err(AuditError::Rejected(format!("sink is full ({limit} events)")));
            }
        }
        events.push(event.clone());
        Ok(())
    }
}

/// A sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl NoopAuditSink {
    /// Creates a new no-op sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &LoginAttemptEvent) -> Result<()> {
        Ok(())
    }
}
