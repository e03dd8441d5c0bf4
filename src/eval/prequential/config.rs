//! Evaluation loop configuration

use std::collections::BTreeMap;

use crate::config::{validate_onsets, ValidationError};
use crate::eval::schedule::{validate_schedule, PositionBasis, SchedulePolicy};

/// Reporting cadence used when none is given
pub const DEFAULT_SAMPLE_FREQ: u64 = 1000;

/// Configuration for one prequential run
#[derive(Clone, Debug, PartialEq)]
pub struct EvalConfig {
    /// Report every `sample_freq` instances of a stream
    pub sample_freq: u64,
    /// Stop after this many instances across all streams
    pub max_instances: Option<u64>,
    /// How the active stream is chosen
    pub policy: SchedulePolicy,
    /// Counter that switch positions and drift onsets refer to
    pub position_basis: PositionBasis,
    /// Ascending drift onsets, keyed by stream index
    pub drift_locations: BTreeMap<usize, Vec<u64>>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_FREQ)
    }
}

impl EvalConfig {
    /// Sequential policy, global positions, no ceiling, no drift tracking
    pub fn new(sample_freq: u64) -> Self {
        Self {
            sample_freq,
            max_instances: None,
            policy: SchedulePolicy::Sequential,
            position_basis: PositionBasis::Global,
            drift_locations: BTreeMap::new(),
        }
    }

    pub fn with_policy(mut self, policy: SchedulePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_instances(mut self, max_instances: u64) -> Self {
        self.max_instances = Some(max_instances);
        self
    }

    pub fn with_position_basis(mut self, basis: PositionBasis) -> Self {
        self.position_basis = basis;
        self
    }

    /// Track drift proximity on `stream` at the given onsets
    pub fn with_drift_locations(mut self, stream: usize, onsets: Vec<u64>) -> Self {
        self.drift_locations.insert(stream, onsets);
        self
    }

    /// Whether any stream has drift onsets configured
    pub fn tracks_drift(&self) -> bool {
        self.drift_locations.values().any(|onsets| !onsets.is_empty())
    }

    /// Check the configuration against the number of streams
    pub fn validate(&self, n_streams: usize) -> Result<(), ValidationError> {
        if self.sample_freq == 0 {
            return Err(ValidationError::InvalidSampleFreq(self.sample_freq));
        }
        if let Some(max) = self.max_instances {
            if max == 0 {
                return Err(ValidationError::InvalidMaxInstances(max));
            }
        }
        if let SchedulePolicy::Explicit(entries) = &self.policy {
            validate_schedule(entries, n_streams, self.position_basis)?;
        }

        for (&stream, onsets) in &self.drift_locations {
            if stream >= n_streams {
                return Err(ValidationError::DriftStreamOutOfRange { stream, n_streams });
            }
            validate_onsets(stream, onsets)?;
        }

        Ok(())
    }
}
