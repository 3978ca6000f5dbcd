//! Error types for auth providers.

use su_audit::AuditError;
use su_config::ConfigError;
use thiserror::Error;

/// Errors an auth provider can return to the host chain.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The presented credentials were rejected.
    #[error("unauthorized: {reason}")]
    Unauthorized {
        /// Why the credentials were rejected.
        reason: String,
    },

    /// The provider does not implement the requested operation.
    #[error("operation not supported: {operation}")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// The provider does not know the user.
    #[error("user not found: {username}")]
    UserNotFound {
        /// The unknown username.
        username: String,
    },

    /// A backing service could not be reached.
    #[error("connection error: {reason}")]
    Connection {
        /// What failed.
        reason: String,
    },

    /// An internal failure prevented authentication.
    #[error("internal authentication error: {reason}")]
    InternalUnauthenticated {
        /// What failed.
        reason: String,
    },

    /// The audit sink failed to record the attempt.
    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl AuthError {
    /// Creates an [`AuthError::Unauthorized`].
    #[must_use]
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    /// Creates an [`AuthError::UnsupportedOperation`].
    #[must_use]
    pub const fn unsupported(operation: &'static str) -> Self {
        Self::UnsupportedOperation { operation }
    }

    /// Whether this is a credential rejection.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Whether this is an unsupported-operation error.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }

    /// Whether a host chain may move on to its next provider.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::UserNotFound { .. })
    }
}

impl From<ConfigError> for AuthError {
    fn from(e: ConfigError) -> Self {
        Self::Connection {
            reason: e.to_string(),
        }
    }
}

/// Result type alias for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;
