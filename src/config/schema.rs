//! YAML schema for declarative evaluation runs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::eval::{PositionBasis, DEFAULT_SAMPLE_FREQ};

fn default_sample_freq() -> u64 {
    DEFAULT_SAMPLE_FREQ
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

/// Complete evaluation specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSpec {
    /// Data streams, indexed by position
    pub streams: Vec<StreamSpec>,

    /// Stream scheduling
    #[serde(default)]
    pub schedule: ScheduleSpec,

    /// Report every N instances of a stream
    #[serde(default = "default_sample_freq")]
    pub sample_freq: u64,

    /// Hard ceiling on instances processed across all streams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_instances: Option<u64>,

    /// Counter that schedule and drift positions refer to
    #[serde(default)]
    pub position_basis: PositionBasis,

    /// Directory receiving per-stream CSVs and the drift log
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// One labeled data stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSpec {
    /// CSV file with a header row and the class label in the last column
    pub path: PathBuf,

    /// File with one drift onset position per line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift_log: Option<PathBuf>,

    /// Inline drift onset positions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift_locations: Option<Vec<u64>>,
}

impl StreamSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), drift_log: None, drift_locations: None }
    }
}

/// Scheduling policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Switch streams at precomputed positions
    Explicit,
    /// Drain each stream in index order
    #[default]
    Sequential,
}

/// Schedule section
///
/// An explicit schedule comes either from a file of `stream switch_at` lines
/// or from inline `[stream, switch_at]` pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleSpec {
    #[serde(default)]
    pub policy: PolicyKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<(usize, u64)>>,
}

impl EvalSpec {
    /// Sequential run over `paths` with default settings
    pub fn sequential<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            streams: paths.into_iter().map(StreamSpec::new).collect(),
            schedule: ScheduleSpec::default(),
            sample_freq: DEFAULT_SAMPLE_FREQ,
            max_instances: None,
            position_basis: PositionBasis::default(),
            output_dir: default_output_dir(),
        }
    }

    /// Whether any stream has drift onsets configured
    pub fn has_drift(&self) -> bool {
        self.streams.iter().any(|s| s.drift_log.is_some() || s.drift_locations.is_some())
    }
}
