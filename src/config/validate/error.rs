//! Validation error types
//!
//! Defines all validation error variants for evaluation specifications.

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No streams configured (at least one is required)")]
    NoStreams,

    #[error("Stream data path does not exist: {0}")]
    StreamPathNotFound(String),

    #[error("Drift log does not exist: {0}")]
    DriftLogNotFound(String),

    #[error("Schedule file does not exist: {0}")]
    ScheduleFileNotFound(String),

    #[error("Invalid sample_freq: {0} (must be > 0)")]
    InvalidSampleFreq(u64),

    #[error("Invalid max_instances: {0} (must be > 0)")]
    InvalidMaxInstances(u64),

    #[error("Explicit schedule needs either `file` or `entries`")]
    MissingScheduleSource,

    #[error("Schedule sets both `file` and `entries` (pick one)")]
    ConflictingScheduleSource,

    #[error("Stream {0} sets both `drift_log` and `drift_locations` (pick one)")]
    ConflictingDriftSource(usize),

    #[error("Schedule entry {entry} names stream {stream} (must be < {n_streams})")]
    ScheduleStreamOutOfRange { entry: usize, stream: usize, n_streams: usize },

    #[error("Schedule entry {entry} switches at {switch_at}, before the previous switch at {previous}")]
    ScheduleNotMonotonic { entry: usize, switch_at: u64, previous: u64 },

    #[error("Drift locations for stream {stream} must be strictly ascending ({onset} follows {previous})")]
    DriftLocationsNotAscending { stream: usize, onset: u64, previous: u64 },

    #[error("Drift locations given for stream {stream} (must be < {n_streams})")]
    DriftStreamOutOfRange { stream: usize, n_streams: usize },
}
