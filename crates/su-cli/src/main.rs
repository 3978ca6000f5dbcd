//! `su-auth` binary entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use su_cli::cli::{Cli, Commands};
use su_cli::commands::{CapabilitiesCommand, CheckCommand};
use su_cli::output::OutputFormat;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match run(cli, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected command; `Ok(false)` means the login was rejected.
fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<bool> {
    let format = OutputFormat::new(cli.format);

    match cli.command {
        Commands::Check(args) => {
            let cmd = CheckCommand::new(cli.properties.as_deref());
            Ok(cmd.execute(out, &format, &args)?)
        }
        Commands::Capabilities => {
            CapabilitiesCommand.execute(out, &format)?;
            Ok(true)
        }
    }
}
