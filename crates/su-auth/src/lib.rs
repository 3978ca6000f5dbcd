//! # su-auth
//!
//! Superuser password authentication for chat server auth chains.
//!
//! [`SuperuserAuthProvider`] lets an operator who knows the configured
//! superuser password log in as any user. It is one [`AuthProvider`] among
//! several in a host [`ProviderChain`], and reports attempts to an optional
//! audit plugin found through the host [`PluginRegistry`].
//!
//! ## Components
//!
//! - [`SuperuserAuthProvider`] - Compares the presented password with the configured one
//! - [`AuditBinding`] - Shared, lazily resolved audit plugin handle plus warn-once flag
//! - [`RegistryAuditResolver`] - Looks the audit plugin up by name until it appears
//! - [`ProviderChain`] - Tries providers in order until one accepts
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use su_audit::MemoryAuditSink;
//! use su_auth::{
//!     AuditBinding, AuthProvider, ProviderChain, StaticPluginRegistry, SuperuserAuthProvider,
//! };
//! use su_auth::config::{AUDIT_PLUGIN_KEY, PASSWORD_KEY};
//! use su_config::PropertyStore;
//!
//! let config = Arc::new(PropertyStore::from_pairs([
//!     (PASSWORD_KEY, "s3cr3t"),
//!     (AUDIT_PLUGIN_KEY, "audit"),
//! ]));
//! let audit = Arc::new(MemoryAuditSink::new());
//! let registry = Arc::new(StaticPluginRegistry::new());
//! registry.register("audit", audit.clone());
//!
//! let superuser = SuperuserAuthProvider::with_registry(
//!     config,
//!     registry,
//!     Arc::new(AuditBinding::new()),
//! );
//! let chain = ProviderChain::new().with("superuser", Arc::new(superuser));
//!
//! assert!(chain.authenticate("alice", "s3cr3t").is_ok());
//! assert!(chain.authenticate("eve", "guess").is_err());
//! assert_eq!(audit.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod binding;
pub mod chain;
pub mod config;
pub mod error;
pub mod provider;
pub mod registry;
pub mod superuser;

// Re-export main types
pub use binding::{
    AuditBinding, AuditBindingState, AuditResolver, RegistryAuditResolver, Resolution,
};
pub use chain::ProviderChain;
pub use config::{SuperuserConfig, SuperuserSecret};
pub use error::{AuthError, Result};
pub use provider::{AuthProvider, Capabilities};
pub use registry::{PluginRegistry, StaticPluginRegistry};
pub use superuser::SuperuserAuthProvider;
