//! Specification validation logic
//!
//! Validates evaluation specifications for correctness before a run.

use super::error::ValidationError;
use crate::config::schema::{EvalSpec, PolicyKind};
use crate::eval::{validate_schedule, ScheduleEntry};

/// Validate an evaluation specification
///
/// Checks:
/// - At least one stream, and every referenced file exists
/// - Numeric values are in valid ranges
/// - Schedule and drift sources are unambiguous
/// - Inline schedule entries and drift locations are well ordered
///
/// File-backed schedules and drift logs are checked once they are read.
pub fn validate_spec(spec: &EvalSpec) -> Result<(), ValidationError> {
    if spec.streams.is_empty() {
        return Err(ValidationError::NoStreams);
    }

    if spec.sample_freq == 0 {
        return Err(ValidationError::InvalidSampleFreq(spec.sample_freq));
    }

    if let Some(max) = spec.max_instances {
        if max == 0 {
            return Err(ValidationError::InvalidMaxInstances(max));
        }
    }

    for (index, stream) in spec.streams.iter().enumerate() {
        if !stream.path.is_file() {
            return Err(ValidationError::StreamPathNotFound(stream.path.display().to_string()));
        }

        match (&stream.drift_log, &stream.drift_locations) {
            (Some(_), Some(_)) => return Err(ValidationError::ConflictingDriftSource(index)),
            (Some(log), None) if !log.is_file() => {
                return Err(ValidationError::DriftLogNotFound(log.display().to_string()));
            }
            (None, Some(onsets)) => validate_onsets(index, onsets)?,
            _ => {}
        }
    }

    if spec.schedule.policy == PolicyKind::Explicit {
        match (&spec.schedule.file, &spec.schedule.entries) {
            (None, None) => return Err(ValidationError::MissingScheduleSource),
            (Some(_), Some(_)) => return Err(ValidationError::ConflictingScheduleSource),
            (Some(file), None) if !file.is_file() => {
                return Err(ValidationError::ScheduleFileNotFound(file.display().to_string()));
            }
            (None, Some(entries)) => {
                let entries: Vec<ScheduleEntry> = entries.iter().copied().map(Into::into).collect();
                validate_schedule(&entries, spec.streams.len(), spec.position_basis)?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Drift onsets must be strictly ascending
pub fn validate_onsets(stream: usize, onsets: &[u64]) -> Result<(), ValidationError> {
    for pair in onsets.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ValidationError::DriftLocationsNotAscending {
                stream,
                onset: pair[1],
                previous: pair[0],
            });
        }
    }
    Ok(())
}
