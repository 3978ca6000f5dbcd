//! Test helpers for the superuser provider integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use su_audit::{AuditSink, MemoryAuditSink};
use su_auth::config::{AUDIT_PLUGIN_KEY, LOG_LOGINS_KEY, PASSWORD_KEY};
use su_auth::{AuditBinding, PluginRegistry, StaticPluginRegistry, SuperuserAuthProvider};
use su_config::PropertyStore;
use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Superuser password used throughout the tests.
pub const SECRET: &str = "s3cr3t";

/// Name the audit plugin is registered under.
pub const AUDIT_PLUGIN: &str = "audit";

/// Builds a property store with the standard test settings.
pub fn properties(log_logins: bool) -> Arc<PropertyStore> {
    Arc::new(PropertyStore::from_pairs([
        (PASSWORD_KEY, SECRET),
        (AUDIT_PLUGIN_KEY, AUDIT_PLUGIN),
        (LOG_LOGINS_KEY, if log_logins { "true" } else { "false" }),
    ]))
}

/// Registry wrapper that counts lookups.
#[derive(Default)]
pub struct CountingRegistry {
    pub inner: StaticPluginRegistry,
    lookups: AtomicUsize,
}

impl CountingRegistry {
    /// Lookups performed so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl PluginRegistry for CountingRegistry {
    fn get_plugin(&self, name: &str) -> Option<Arc<dyn AuditSink>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_plugin(name)
    }
}

/// A provider wired to a counting registry and an in-memory audit sink.
pub struct Fixture {
    pub config: Arc<PropertyStore>,
    pub registry: Arc<CountingRegistry>,
    pub binding: Arc<AuditBinding>,
    pub sink: Arc<MemoryAuditSink>,
    pub provider: SuperuserAuthProvider,
}

impl Fixture {
    /// Builds a fixture; the audit sink is registered only if `audit_available`.
    pub fn new(audit_available: bool, log_logins: bool) -> Self {
        let config = properties(log_logins);
        let registry = Arc::new(CountingRegistry::default());
        let binding = Arc::new(AuditBinding::new());
        let sink = Arc::new(MemoryAuditSink::new());
        if audit_available {
            registry.inner.register(AUDIT_PLUGIN, sink.clone());
        }
        let provider =
            SuperuserAuthProvider::with_registry(config.clone(), registry.clone(), binding.clone());
        Self {
            config,
            registry,
            binding,
            sink,
            provider,
        }
    }

    /// Registers the audit sink after construction.
    pub fn load_audit_plugin(&self) {
        self.registry.inner.register(AUDIT_PLUGIN, self.sink.clone());
    }
}

/// Layer counting `WARN` events emitted by `su_auth`.
#[derive(Clone, Default)]
pub struct WarnCounter {
    count: Arc<AtomicUsize>,
}

impl WarnCounter {
    /// Warnings seen so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// A dispatcher that feeds this counter.
    pub fn dispatch(&self) -> tracing::Dispatch {
        tracing::Dispatch::new(tracing_subscriber::registry().with(self.clone()))
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::WARN && meta.target().starts_with("su_auth") {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// One event seen by [`FieldRecorder`].
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub level: Level,
    pub target: String,
    pub fields: Vec<(String, String)>,
}

impl RecordedEvent {
    /// Whether any field name or value contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.fields
            .iter()
            .any(|(name, value)| name.contains(needle) || value.contains(needle))
    }
}

#[derive(Default)]
struct FieldVisitor(Vec<(String, String)>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

/// Layer recording every event, at every level, with its fields rendered.
#[derive(Clone, Default)]
pub struct FieldRecorder {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl FieldRecorder {
    /// Events recorded so far.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().clone()
    }

    /// A dispatcher that feeds this recorder.
    pub fn dispatch(&self) -> tracing::Dispatch {
        tracing::Dispatch::new(tracing_subscriber::registry().with(self.clone()))
    }
}

impl<S: Subscriber> Layer<S> for FieldRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().push(RecordedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: visitor.0,
        });
    }
}
