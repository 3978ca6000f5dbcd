//! The interchangeable provider interface used by host auth chains.

use std::fmt;

use crate::error::Result;

/// Fixed capability flags advertised by a provider.
///
/// Hosts branch on these instead of probing operations for errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    /// Accepts a username and plaintext password.
    pub plain: bool,
    /// Accepts a username, token and digest.
    pub digest: bool,
    /// Can return stored passwords.
    pub password_retrieval: bool,
}

impl Capabilities {
    /// Plaintext authentication only.
    pub const PLAIN_ONLY: Self = Self {
        plain: true,
        digest: false,
        password_retrieval: false,
    };

    /// Union of two capability sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            plain: self.plain || other.plain,
            digest: self.digest || other.digest,
            password_retrieval: self.password_retrieval || other.password_retrieval,
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "plain={} digest={} password_retrieval={}",
            self.plain, self.digest, self.password_retrieval
        )
    }
}

/// One strategy in a host authentication chain.
///
/// A provider that rejects credentials returns
/// [`AuthError::Unauthorized`](crate::AuthError::Unauthorized) so the chain
/// can try the next one. Operations a provider does not implement return
/// [`AuthError::UnsupportedOperation`](crate::AuthError::UnsupportedOperation)
/// and are reported as such in [`AuthProvider::capabilities`].
pub trait AuthProvider: Send + Sync {
    /// Authenticates `username` with a plaintext `password`.
    fn authenticate(&self, username: &str, password: &str) -> Result<()>;

    /// Authenticates `username` with a digest of `token` and the password.
    fn authenticate_digest(&self, username: &str, token: &str, digest: &str) -> Result<()>;

    /// Returns the stored password for `username`.
    fn get_password(&self, username: &str) -> Result<String>;

    /// Replaces the stored password for `username`.
    fn set_password(&self, username: &str, password: &str) -> Result<()>;

    /// Capability flags for this provider.
    fn capabilities(&self) -> Capabilities;

    /// Whether [`AuthProvider::authenticate`] is supported.
    fn is_plain_supported(&self) -> bool {
        self.capabilities().plain
    }

    /// Whether [`AuthProvider::authenticate_digest`] is supported.
    fn is_digest_supported(&self) -> bool {
        self.capabilities().digest
    }

    /// Whether [`AuthProvider::get_password`] is supported.
    fn supports_password_retrieval(&self) -> bool {
        self.capabilities().password_retrieval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_only_flags() {
        let caps = Capabilities::PLAIN_ONLY;
        assert!(caps.plain);
        assert!(!caps.digest);
        assert!(!caps.password_retrieval);
    }

    #[test]
    fn union_combines_flags() {
        let digest = Capabilities {
            digest: true,
            ..Capabilities::default()
        };
        let caps = Capabilities::PLAIN_ONLY.union(digest);
        assert!(caps.plain);
        assert!(caps.digest);
        assert!(!caps.password_retrieval);
    }

    #[test]
    fn display_lists_flags() {
        assert_eq!(
            Capabilities::PLAIN_ONLY.to_string(),
            "plain=true digest=false password_retrieval=false"
        );
    }
}
