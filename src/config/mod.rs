//! Declarative evaluation configuration
//!
//! A YAML [`EvalSpec`] names the streams, the schedule, the reporting
//! cadence and the output directory. [`resolve_config`] validates it, reads
//! the schedule file and drift logs it references and produces the
//! [`EvalConfig`](crate::eval::EvalConfig) driving the evaluator.

pub mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, InfoArgs, OutputFormat, RunArgs, ValidateArgs,
};
pub use loader::{
    load_spec, parse_drift_log, parse_schedule, parse_spec, read_drift_log, read_schedule_file,
    resolve_config,
};
pub use schema::{EvalSpec, PolicyKind, ScheduleSpec, StreamSpec};
pub use validate::{validate_onsets, validate_spec, ValidationError};
