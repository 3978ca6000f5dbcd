//! Ordered chain of auth providers.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{AuthError, Result};
use crate::provider::{AuthProvider, Capabilities};

/// Reason returned when every provider rejected the credentials.
pub const NO_PROVIDER_ACCEPTED: &str = "no provider accepted the credentials";

/// Tries providers in order until one accepts.
///
/// Rejections ([`AuthError::is_recoverable`]) move on to the next provider.
/// Any other error stops the chain and is returned unchanged.
#[derive(Default, Clone)]
pub struct ProviderChain {
    providers: Vec<(String, Arc<dyn AuthProvider>)>,
}

impl ProviderChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `provider` under `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, provider: Arc<dyn AuthProvider>) -> Self {
        self.push(name, provider);
        self
    }

    /// Appends `provider` under `name`.
    pub fn push(&mut self, name: impl Into<String>, provider: Arc<dyn AuthProvider>) {
        self.providers.push((name.into(), provider));
    }

    /// Provider names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|(name, _)| name.as_str())
    }

    /// Number of providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Authenticates against each plain-capable provider in turn, returning
    /// the name of the provider that accepted.
    pub fn authenticate_with(&self, username: &str, password: &str) -> Result<&str> {
        for (name, provider) in &self.providers {
            if !provider.is_plain_supported() {
                trace!(provider = %name, "skipping provider without plain support");
                continue;
            }
            match provider.authenticate(username, password) {
                Ok(()) => {
                    debug!(provider = %name, username, "authenticated");
                    return Ok(name.as_str());
                }
                Err(e) if e.is_recoverable() => {
                    debug!(
                        provider = %name,
                        username,
                        error = %e,
                        "provider rejected, trying next"
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Err(AuthError::unauthorized(NO_PROVIDER_ACCEPTED))
    }
}

impl AuthProvider for ProviderChain {
    fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        self.authenticate_with(username, password).map(|_| ())
    }

    fn authenticate_digest(&self, username: &str, token: &str, digest: &str) -> Result<()> {
        for (name, provider) in &self.providers {
            if !provider.is_digest_supported() {
                continue;
            }
            match provider.authenticate_digest(username, token, digest) {
                Ok(()) => {
                    debug!(provider = %name, username, "authenticated with digest");
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {}
                Err(e) => return Err(e),
            }
        }
        if self.is_digest_supported() {
            Err(AuthError::unauthorized(NO_PROVIDER_ACCEPTED))
        } else {
            Err(AuthError::unsupported("authenticate_digest"))
        }
    }

    fn get_password(&self, username: &str) -> Result<String> {
        self.providers
            .iter()
            .find(|(_, p)| p.supports_password_retrieval())
            .map_or_else(
                || Err(AuthError::unsupported("get_password")),
                |(_, p)| p.get_password(username),
            )
    }

    fn set_password(&self, username: &str, password: &str) -> Result<()> {
        // The first provider that does not reject the call owns the user.
        for (_, provider) in &self.providers {
            match provider.set_password(username, password) {
                Err(e) if e.is_unsupported() || matches!(e, AuthError::UserNotFound { .. }) => {}
                other => return other,
            }
        }
        Err(AuthError::unsupported("set_password"))
    }

    fn capabilities(&self) -> Capabilities {
        self.providers
            .iter()
            .fold(Capabilities::default(), |acc, (_, p)| acc.union(p.capabilities()))
    }
}

impl fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderChain")
            .field("providers", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
