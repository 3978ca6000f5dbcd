//! # su-cli
//!
//! Operator tool for the superuser auth provider.
//!
//! Provides commands for:
//! - Checking a credential against a property file, with a selectable audit sink
//! - Printing the provider's capability flags

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{CheckArgs, Cli, Commands, Format, SinkKind};
pub use commands::{CapabilitiesCommand, CheckCommand};
pub use error::CliError;
pub use output::OutputFormat;
