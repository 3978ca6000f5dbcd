//! Host plugin registry lookups.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use su_audit::AuditSink;
use tracing::debug;

/// Host-provided lookup of audit plugins by name.
pub trait PluginRegistry: Send + Sync {
    /// Returns the audit plugin registered under `name`, if loaded.
    fn get_plugin(&self, name: &str) -> Option<Arc<dyn AuditSink>>;
}

/// In-process registry of named audit sinks.
///
/// Plugins may be registered at any time; lookups see the latest state.
#[derive(Default)]
pub struct StaticPluginRegistry {
    plugins: RwLock<HashMap<String, Arc<dyn AuditSink>>>,
}

impl StaticPluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `sink` under `name`, replacing any previous plugin.
    pub fn register(&self, name: impl Into<String>, sink: Arc<dyn AuditSink>) {
        let name = name.into();
        debug!(plugin = %name, "registered audit plugin");
        self.plugins.write().insert(name, sink);
    }

    /// Removes the plugin registered under `name`.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn AuditSink>> {
        self.plugins.write().remove(name)
    }

    /// Whether a plugin is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.read().contains_key(name)
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.read().len()
    }

    /// Whether no plugins are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.read().is_empty()
    }
}

impl PluginRegistry for StaticPluginRegistry {
    fn get_plugin(&self, name: &str) -> Option<Arc<dyn AuditSink>> {
        self.plugins.read().get(name).cloned()
    }
}

impl fmt::Debug for StaticPluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plugins = self.plugins.read();
        let mut names: Vec<&String> = plugins.keys().collect();
        names.sort();
        f.debug_struct("StaticPluginRegistry")
            .field("plugins", &names)
            .finish()
    }
}
