//! CLI module for evaluar
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
mod logging;

pub use commands::{execute, run_command, DRIFT_LOG_FILE, SNAPSHOT_FILE};
pub use logging::{log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
