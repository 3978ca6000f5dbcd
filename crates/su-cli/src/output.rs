//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;

use serde::Serialize;
use su_audit::{LoginAttemptEvent, Outcome};
use su_auth::Capabilities;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone, Default)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a serializable value to the output.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => value.write_table(writer)?,
        }
        Ok(())
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value in human-readable form.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Result of one `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Username that was presented.
    pub username: String,
    /// Whether the attempt was accepted.
    pub outcome: Outcome,
    /// Whether an audit plugin was bound for the attempt.
    pub audit_available: bool,
    /// Records captured by the in-memory sink, if it was selected.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<LoginAttemptEvent>,
}

impl CheckReport {
    /// Whether the attempt was accepted.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.outcome.is_success()
    }
}

impl TableDisplay for CheckReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        let verdict = if self.accepted() { "accepted" } else { "rejected" };
        writeln!(writer, "{verdict}")?;
        if !self.audit_available {
            writeln!(writer, "  (audit plugin unavailable)")?;
        }
        for record in &self.records {
            writeln!(
                writer,
                "  audit: {}  {:<24}  {}",
                record.timestamp.to_rfc3339(),
                record.username,
                record.outcome
            )?;
        }
        Ok(())
    }
}

/// Capability flags for display.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CapabilityReport {
    /// Plain password authentication.
    pub plain: bool,
    /// Digest authentication.
    pub digest: bool,
    /// Password retrieval.
    pub password_retrieval: bool,
}

impl From<Capabilities> for CapabilityReport {
    fn from(caps: Capabilities) -> Self {
        Self {
            plain: caps.plain,
            digest: caps.digest,
            password_retrieval: caps.password_retrieval,
        }
    }
}

impl TableDisplay for CapabilityReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        writeln!(writer, "{:<20}  {}", "plain", yes_no(self.plain))?;
        writeln!(writer, "{:<20}  {}", "digest", yes_no(self.digest))?;
        writeln!(
            writer,
            "{:<20}  {}",
            "password retrieval",
            yes_no(self.password_retrieval)
        )?;
        Ok(())
    }
}
