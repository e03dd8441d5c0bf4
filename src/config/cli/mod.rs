//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! evaluar run eval.yaml
//! evaluar run eval.yaml --output-dir ./results --sample-freq 500
//! evaluar validate eval.yaml --detailed
//! evaluar info eval.yaml --format json
//! ```

mod args;
mod types;

pub use args::{apply_overrides, parse_args, Cli, Command, InfoArgs, RunArgs, ValidateArgs};
pub use types::OutputFormat;
