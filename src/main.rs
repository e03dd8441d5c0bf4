//! Evaluar CLI
//!
//! Prequential evaluation entry point for the evaluar library.
//!
//! # Usage
//!
//! ```bash
//! # Run an evaluation
//! evaluar run eval.yaml
//!
//! # Run with overrides
//! evaluar run eval.yaml --sample-freq 500 --output-dir results/agrawal
//!
//! # Validate config, reading schedule files and drift logs
//! evaluar validate eval.yaml --detailed
//!
//! # Show resolved config
//! evaluar info eval.yaml --format yaml
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli, LogLevel};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = LogLevel::from_flags(cli.quiet, cli.verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.tracing_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
