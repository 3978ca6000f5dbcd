//! # su-config
//!
//! Key-value configuration for the superuser auth provider.
//!
//! - [`ConfigurationSource`] - Read-only lookup trait consumed by providers
//! - [`PropertyStore`] - In-memory store, optionally loaded from a JSON file
//!
//! Providers read through [`ConfigurationSource`] on every call, so a value
//! changed with [`PropertyStore::set`] or [`PropertyStore::reload`] is seen by
//! the next login attempt.
//!
//! ```rust
//! use su_config::{ConfigurationSource, PropertyStore};
//!
//! let store = PropertyStore::new();
//! store.set("auth.superuser.log_logins", "TRUE");
//! assert!(store.get_bool("auth.superuser.log_logins").unwrap_or(false));
//! assert!(!store.get_bool("missing").unwrap_or(true));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;

pub use error::{ConfigError, ConfigResult};
pub use store::PropertyStore;

/// Read-only access to string and boolean properties.
pub trait ConfigurationSource: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get_string(&self, key: &str) -> ConfigResult<Option<String>>;

    /// Returns the boolean stored under `key`.
    ///
    /// Absent keys read as `false`. Present values are `true` only when they
    /// equal `"true"` ignoring ASCII case.
    fn get_bool(&self, key: &str) -> ConfigResult<bool> {
        Ok(self.get_string(key)?.is_some_and(|v| parse_bool(&v)))
    }
}

impl<T: ConfigurationSource + ?Sized> ConfigurationSource for std::sync::Arc<T> {
    fn get_string(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).get_string(key)
    }

    fn get_bool(&self, key: &str) -> ConfigResult<bool> {
        (**self).get_bool(key)
    }
}

/// Parses a property value as a boolean.
#[must_use]
pub fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
