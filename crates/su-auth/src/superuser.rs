//! Superuser password provider.
//!
//! Accepts any username when the presented password equals the configured
//! superuser password. Settings are read on every attempt, so the password
//! can be rotated without a restart.

use std::fmt;
use std::sync::Arc;

use su_config::ConfigurationSource;
use tracing::debug;

use crate::binding::{AuditBinding, AuditResolver, RegistryAuditResolver};
use crate::config::SuperuserConfig;
use crate::error::{AuthError, Result};
use crate::provider::{AuthProvider, Capabilities};
use crate::registry::PluginRegistry;

/// Reason attached to rejected superuser logins.
pub const INCORRECT_PASSWORD: &str = "incorrect superuser password";

/// Auth provider that accepts a single shared superuser password for any
/// username.
///
/// Every failed attempt is audited when an audit plugin is available.
/// Successful attempts are audited only when
/// [`LOG_LOGINS_KEY`](crate::config::LOG_LOGINS_KEY) is enabled.
pub struct SuperuserAuthProvider {
    config: Arc<dyn ConfigurationSource>,
    resolver: Arc<dyn AuditResolver>,
}

impl SuperuserAuthProvider {
    /// Creates a provider reading settings from `config` and resolving the
    /// audit plugin through `resolver`.
    #[must_use]
    pub fn new(config: Arc<dyn ConfigurationSource>, resolver: Arc<dyn AuditResolver>) -> Self {
        Self { config, resolver }
    }

    /// Creates a provider that looks the audit plugin up in `registry`,
    /// caching it in the shared `binding`.
    #[must_use]
    pub fn with_registry(
        config: Arc<dyn ConfigurationSource>,
        registry: Arc<dyn PluginRegistry>,
        binding: Arc<AuditBinding>,
    ) -> Self {
        Self::new(config, Arc::new(RegistryAuditResolver::new(registry, binding)))
    }
}

impl AuthProvider for SuperuserAuthProvider {
    fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        let cfg = SuperuserConfig::load(self.config.as_ref())?;
        let sink = self.resolver.resolve(cfg.audit_plugin.as_deref()).into_sink();

        if !cfg.secret_matches(password) {
            debug!(username, outcome = "failure", "superuser login rejected");
            if let Some(sink) = &sink {
                sink.record_login_attempt(username, false)?;
            }
            return Err(AuthError::unauthorized(INCORRECT_PASSWORD));
        }

        debug!(username, outcome = "success", "superuser login accepted");
        if cfg.log_logins {
            if let Some(sink) = &sink {
                sink.record_login_attempt(username, true)?;
            }
        }
        Ok(())
    }

    fn authenticate_digest(&self, _username: &str, _token: &str, _digest: &str) -> Result<()> {
        Err(AuthError::unsupported("authenticate_digest"))
    }

    fn get_password(&self, _username: &str) -> Result<String> {
        Err(AuthError::unsupported("get_password"))
    }

    fn set_password(&self, _username: &str, _password: &str) -> Result<()> {
        Err(AuthError::unsupported("set_password"))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::PLAIN_ONLY
    }
}

impl fmt::Debug for SuperuserAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuperuserAuthProvider").finish_non_exhaustive()
    }
}
