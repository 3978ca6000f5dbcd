//! Command implementations.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use su_audit::{AuditSink, MemoryAuditSink, Outcome, TracingAuditSink};
use su_auth::{
    AuditBinding, AuditBindingState, AuthProvider, StaticPluginRegistry, SuperuserAuthProvider,
    SuperuserConfig,
};
use su_config::PropertyStore;
use tracing::debug;

use crate::cli::{CheckArgs, SinkKind};
use crate::error::CliError;
use crate::output::{CapabilityReport, CheckReport, OutputFormat};

/// Runs one login attempt against a property file.
#[derive(Debug)]
pub struct CheckCommand<'a> {
    properties: Option<&'a Path>,
}

impl<'a> CheckCommand<'a> {
    /// Create a check command reading settings from `properties`.
    #[must_use]
    pub const fn new(properties: Option<&'a Path>) -> Self {
        Self { properties }
    }

    /// Execute the command, returning whether the attempt was accepted.
    ///
    /// A rejected password is reported, not returned as an error.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        args: &CheckArgs,
    ) -> Result<bool, CliError> {
        let path = self.properties.ok_or(CliError::MissingProperties)?;
        let store = Arc::new(PropertyStore::open(path)?);
        let settings = SuperuserConfig::load(store.as_ref())?;

        let registry = Arc::new(StaticPluginRegistry::new());
        let memory = Arc::new(MemoryAuditSink::new());
        if let Some(name) = settings.audit_plugin.as_deref() {
            let sink: Option<Arc<dyn AuditSink>> = match args.audit_sink {
                SinkKind::Tracing => Some(Arc::new(TracingAuditSink::new())),
                SinkKind::Memory => Some(memory.clone()),
                SinkKind::None => None,
            };
            if let Some(sink) = sink {
                registry.register(name, sink);
            }
        }

        let binding = Arc::new(AuditBinding::new());
        let provider = SuperuserAuthProvider::with_registry(store, registry, binding.clone());

        let accepted = match provider.authenticate(&args.username, &args.password) {
            Ok(()) => true,
            Err(e) if e.is_unauthorized() => {
                debug!(error = %e, "login rejected");
                false
            }
            Err(e) => return Err(e.into()),
        };

        let report = CheckReport {
            username: args.username.clone(),
            outcome: Outcome::from_success(accepted),
            audit_available: binding.state() == AuditBindingState::Resolved,
            records: memory.events(),
        };
        format.write(writer, &report)?;
        Ok(accepted)
    }
}

/// Prints the superuser provider's capability flags.
#[derive(Debug, Default)]
pub struct CapabilitiesCommand;

impl CapabilitiesCommand {
    /// Execute the command.
    pub fn execute<W: Write>(&self, writer: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        let provider = SuperuserAuthProvider::with_registry(
            Arc::new(PropertyStore::new()),
            Arc::new(StaticPluginRegistry::new()),
            Arc::new(AuditBinding::new()),
        );
        format.write(writer, &CapabilityReport::from(provider.capabilities()))
    }
}
