//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Superuser credential checker.
#[derive(Parser, Debug, Clone)]
#[command(name = "su-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON property file holding the `auth.superuser.*` settings.
    #[arg(short, long, env = "SU_AUTH_PROPERTIES")]
    pub properties: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Human-readable output.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run one superuser login attempt.
    Check(CheckArgs),

    /// Show the provider's capability flags.
    Capabilities,
}

/// Arguments for the check command.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Username to log in as.
    pub username: String,

    /// Password to present.
    #[arg(short = 'P', long, env = "SU_AUTH_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Audit plugin to register under the configured plugin name.
    #[arg(long, value_enum, default_value_t = SinkKind::Tracing)]
    pub audit_sink: SinkKind,
}

/// Audit plugin implementations selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SinkKind {
    /// Emit records as `tracing` events.
    #[default]
    Tracing,
    /// Keep records in memory and include them in the report.
    Memory,
    /// Register nothing; the plugin stays unavailable.
    None,
}
