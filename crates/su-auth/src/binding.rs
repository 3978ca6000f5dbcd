//! Lazy binding to the audit plugin.
//!
//! The first lookup that finds the plugin wins and is kept for the lifetime
//! of the [`AuditBinding`]. While the plugin is missing every attempt looks
//! it up again, and the "plugin not found" warning is emitted only once.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use su_audit::AuditSink;
use tracing::{info, warn};

use crate::registry::PluginRegistry;

/// State of an [`AuditBinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditBindingState {
    /// No plugin has been found yet.
    Unresolved,
    /// A plugin was found and is cached. Terminal.
    Resolved,
}

/// Shared audit plugin binding.
///
/// Shared through an `Arc` by every provider and request thread. The
/// handle cell is assigned at most once; the warn flag only moves from
/// `false` to `true`.
#[derive(Default)]
pub struct AuditBinding {
    sink: OnceLock<Arc<dyn AuditSink>>,
    warned: AtomicBool,
}

impl AuditBinding {
    /// Creates an unresolved binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AuditBindingState {
        if self.sink.get().is_some() {
            AuditBindingState::Resolved
        } else {
            AuditBindingState::Unresolved
        }
    }

    /// Cached plugin handle, if resolved.
    #[must_use]
    pub fn sink(&self) -> Option<Arc<dyn AuditSink>> {
        self.sink.get().cloned()
    }

    /// Whether the missing-plugin warning has been emitted.
    #[must_use]
    pub fn has_warned(&self) -> bool {
        self.warned.load(Ordering::Acquire)
    }

    /// Stores `sink` unless another thread got there first, returning the
    /// handle that ended up cached.
    fn bind(&self, sink: Arc<dyn AuditSink>) -> Arc<dyn AuditSink> {
        self.sink.get_or_init(|| sink).clone()
    }

    /// Claims the right to emit the missing-plugin warning.
    ///
    /// Returns `true` for exactly one caller over the binding's lifetime.
    fn claim_warning(&self) -> bool {
        self.warned
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl fmt::Debug for AuditBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditBinding")
            .field("state", &self.state())
            .field("warned", &self.has_warned())
            .finish()
    }
}

/// Outcome of one [`AuditResolver::resolve`] call.
#[derive(Clone)]
pub enum Resolution {
    /// The plugin was already cached; no lookup happened.
    Cached(Arc<dyn AuditSink>),
    /// This call looked the plugin up and bound it.
    Resolved(Arc<dyn AuditSink>),
    /// The plugin is not available.
    Unavailable {
        /// Whether this call emitted the one-time warning.
        warned: bool,
    },
}

impl Resolution {
    /// The plugin handle, if available.
    #[must_use]
    pub fn sink(&self) -> Option<&Arc<dyn AuditSink>> {
        match self {
            Self::Cached(sink) | Self::Resolved(sink) => Some(sink),
            Self::Unavailable { .. } => None,
        }
    }

    /// Consumes the resolution, returning the plugin handle if available.
    #[must_use]
    pub fn into_sink(self) -> Option<Arc<dyn AuditSink>> {
        match self {
            Self::Cached(sink) | Self::Resolved(sink) => Some(sink),
            Self::Unavailable { .. } => None,
        }
    }

    /// Whether a plugin is available.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cached(_) => f.write_str("Cached"),
            Self::Resolved(_) => f.write_str("Resolved"),
            Self::Unavailable { warned } => f
                .debug_struct("Unavailable")
                .field("warned", warned)
                .finish(),
        }
    }
}

/// Resolves the audit plugin for a login attempt.
pub trait AuditResolver: Send + Sync {
    /// Returns the audit plugin named `name`, resolving it if needed.
    ///
    /// `name` is the currently configured plugin name; `None` means no
    /// plugin is configured.
    fn resolve(&self, name: Option<&str>) -> Resolution;
}

/// [`AuditResolver`] backed by a host [`PluginRegistry`].
pub struct RegistryAuditResolver {
    registry: Arc<dyn PluginRegistry>,
    binding: Arc<AuditBinding>,
}

impl RegistryAuditResolver {
    /// Creates a resolver over `registry` that caches into `binding`.
    #[must_use]
    pub fn new(registry: Arc<dyn PluginRegistry>, binding: Arc<AuditBinding>) -> Self {
        Self { registry, binding }
    }

    /// The shared binding.
    #[must_use]
    pub fn binding(&self) -> &Arc<AuditBinding> {
        &self.binding
    }
}

impl AuditResolver for RegistryAuditResolver {
    fn resolve(&self, name: Option<&str>) -> Resolution {
        if let Some(sink) = self.binding.sink() {
            return Resolution::Cached(sink);
        }

        if let Some(name) = name {
            if let Some(sink) = self.registry.get_plugin(name) {
                info!(plugin = name, "bound audit plugin");
                return Resolution::Resolved(self.binding.bind(sink));
            }
        }

        let warned = self.binding.claim_warning();
        if warned {
            warn!(
                plugin = name.unwrap_or("<unset>"),
                "audit plugin not found; superuser logins will not be audited"
            );
        }
        Resolution::Unavailable { warned }
    }
}

impl fmt::Debug for RegistryAuditResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryAuditResolver")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}
