//! Per-attempt configuration for the superuser provider.

use std::fmt;

use su_config::ConfigurationSource;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;

/// Property holding the superuser password.
pub const PASSWORD_KEY: &str = "auth.superuser.password";

/// Property naming the audit plugin to report attempts to.
pub const AUDIT_PLUGIN_KEY: &str = "auth.superuser.audit_plugin";

/// Property enabling audit records for successful logins.
pub const LOG_LOGINS_KEY: &str = "auth.superuser.log_logins";

/// The configured superuser password, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SuperuserSecret {
    secret: String,
}

impl SuperuserSecret {
    /// Wraps a configured secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Compares `presented` with this secret in constant time.
    ///
    /// The comparison is exact: case-sensitive, no trimming, no normalization.
    #[must_use]
    pub fn matches(&self, presented: &str) -> bool {
        self.secret.as_bytes().ct_eq(presented.as_bytes()).into()
    }
}

impl fmt::Debug for SuperuserSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the secret in debug output
        f.debug_struct("SuperuserSecret")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Snapshot of the provider settings for one login attempt.
#[derive(Debug, Clone)]
pub struct SuperuserConfig {
    /// The superuser password. `None` rejects every attempt.
    pub secret: Option<SuperuserSecret>,
    /// Name of the audit plugin to look up.
    pub audit_plugin: Option<String>,
    /// Whether successful logins are audited.
    pub log_logins: bool,
}

impl SuperuserConfig {
    /// Reads the current settings from `source`.
    pub fn load(source: &dyn ConfigurationSource) -> Result<Self> {
        Ok(Self {
            secret: source.get_string(PASSWORD_KEY)?.map(SuperuserSecret::new),
            audit_plugin: source.get_string(AUDIT_PLUGIN_KEY)?,
            log_logins: source.get_bool(LOG_LOGINS_KEY)?,
        })
    }

    /// Whether `presented` equals the configured secret.
    #[must_use]
    pub fn secret_matches(&self, presented: &str) -> bool {
        self.secret.as_ref().is_some_and(|s| s.matches(presented))
    }
}
