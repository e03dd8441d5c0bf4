//! Crate-level error type
//!
//! Each layer keeps its own error enum (`ValidationError`, `SinkError`) and
//! rolls up into [`Error`] at the evaluator and CLI boundary.

use std::path::PathBuf;

use crate::config::ValidationError;
use crate::sink::SinkError;

/// Result type alias for evaluar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// A data source could not be opened or read
    #[error("Data source error in {path}: {message}\n  → Check the stream path and CSV layout (header row, label in last column)")]
    DataSource { path: PathBuf, message: String },

    /// The classifier failed while predicting or training
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// A metrics or drift sink rejected a write
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// IO error with context
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a data source error for the given path.
    pub fn data_source(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataSource { path: path.into(), message: message.into() }
    }

    /// Whether the error stems from user input rather than a runtime failure.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError(_) | Self::Validation(_) | Self::DataSource { .. })
    }
}
