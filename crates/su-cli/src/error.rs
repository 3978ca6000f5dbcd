//! CLI error types.

use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// No property file was given.
    #[error("no property file given (use --properties or SU_AUTH_PROPERTIES)")]
    MissingProperties,

    /// The property file could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] su_config::ConfigError),

    /// Authentication failed for a reason other than a rejection.
    #[error("authentication error: {0}")]
    Auth(#[from] su_auth::AuthError),

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
