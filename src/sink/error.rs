//! Sink error types

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Sink errors
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
