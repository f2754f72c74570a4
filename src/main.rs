//! bdm: generate documents from clause templates or AI-generated clauses.
//!
//! This is the main entry point for the `bdm` CLI. It parses arguments,
//! sets up logging, loads configuration, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

use bdm_client::cli::Cli;
use bdm_client::commands;
use bdm_client::config::Config;
use bdm_client::exit_codes;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Notifications already reach the terminal, so the log stays quiet unless asked.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let result = Config::resolve(cli.config.as_deref())
        .and_then(|config| commands::dispatch(cli.command, &config));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
