//! Login attempt audit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::Result;

/// Authentication method recorded for superuser logins.
pub const SUPERUSER_METHOD: &str = "superuser";

/// Severity level for audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational event (a successful login).
    Info = 0,
    /// Medium severity (a failed login).
    Medium = 1,
}

impl Severity {
    /// Returns the string representation of this severity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The credentials were accepted.
    Success,
    /// The credentials were rejected.
    Failure,
}

impl Outcome {
    /// Maps an accept/reject flag to an outcome.
    #[must_use]
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }

    /// Whether this outcome is a success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the string representation of this outcome.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single audited login attempt.
///
/// Never carries the presented or configured secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttemptEvent {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// When the attempt happened.
    pub timestamp: DateTime<Utc>,
    /// Username the caller tried to log in as.
    pub username: String,
    /// Whether the attempt was accepted.
    pub outcome: Outcome,
    /// Authentication method used.
    pub method: String,
}

impl LoginAttemptEvent {
    /// Creates a superuser login event stamped with the current time.
    #[must_use]
    pub fn new(username: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            username: username.into(),
            outcome,
            method: SUPERUSER_METHOD.to_string(),
        }
    }

    /// Severity derived from the outcome.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self.outcome {
            Outcome::Success => Severity::Info,
            Outcome::Failure => Severity::Medium,
        }
    }

    /// Whether the attempt was accepted.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Serializes the event to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
