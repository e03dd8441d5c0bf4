//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::schema::EvalSpec;

/// Evaluar: prequential evaluation for online classifiers
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Prequential (test-then-train) evaluation of online classifiers over multiplexed streams")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run an evaluation from YAML configuration
    Run(RunArgs),

    /// Validate a configuration file without running
    Validate(ValidateArgs),

    /// Display the resolved configuration
    Info(InfoArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override reporting cadence
    #[arg(short, long)]
    pub sample_freq: Option<u64>,

    /// Override the instance ceiling
    #[arg(short, long)]
    pub max_instances: Option<u64>,

    /// Summary format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Also read schedule files and drift logs
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to an EvalSpec
pub fn apply_overrides(spec: &mut EvalSpec, args: &RunArgs) {
    if let Some(output_dir) = &args.output_dir {
        spec.output_dir = output_dir.clone();
    }
    if let Some(sample_freq) = args.sample_freq {
        spec.sample_freq = sample_freq;
    }
    if let Some(max_instances) = args.max_instances {
        spec.max_instances = Some(max_instances);
    }
}
