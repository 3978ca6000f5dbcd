//! Error types for the audit sinks.

use thiserror::Error;

/// Errors that can occur while recording an audit event.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Failed to serialize an event.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The sink refused the event.
    #[error("audit sink rejected event: {0}")]
    Rejected(String),
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
