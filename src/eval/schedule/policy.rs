//! Scheduling policy types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ValidationError;

/// One step of an explicit schedule
///
/// `stream` stays active until the position counter reaches `switch_at`
/// and another entry is waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub stream: usize,
    pub switch_at: u64,
}

impl ScheduleEntry {
    pub fn new(stream: usize, switch_at: u64) -> Self {
        Self { stream, switch_at }
    }
}

impl From<(usize, u64)> for ScheduleEntry {
    fn from((stream, switch_at): (usize, u64)) -> Self {
        Self { stream, switch_at }
    }
}

/// How the active stream is chosen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchedulePolicy {
    /// Interleave streams according to precomputed switch positions
    Explicit(Vec<ScheduleEntry>),
    /// Drain stream 0, then stream 1, and so on
    #[default]
    Sequential,
}

impl SchedulePolicy {
    /// Explicit policy from `(stream, switch_at)` pairs
    pub fn explicit<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ScheduleEntry>,
    {
        Self::Explicit(entries.into_iter().map(Into::into).collect())
    }

    /// Short name used in logs and summaries
    pub fn name(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicit",
            Self::Sequential => "sequential",
        }
    }
}

/// Which counter schedule switch positions and drift onsets refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionBasis {
    /// Instances processed across all streams
    #[default]
    Global,
    /// Instances processed on the active stream
    Stream,
}

impl std::fmt::Display for PositionBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Stream => write!(f, "stream"),
        }
    }
}

/// Check explicit schedule entries against the stream count
///
/// Every index must name an existing stream, and switch positions must not
/// decrease: across the whole schedule for [`PositionBasis::Global`], per
/// stream for [`PositionBasis::Stream`].
pub fn validate_schedule(
    entries: &[ScheduleEntry],
    n_streams: usize,
    basis: PositionBasis,
) -> Result<(), ValidationError> {
    let mut last_global: Option<u64> = None;
    let mut last_per_stream: HashMap<usize, u64> = HashMap::new();

    for (position, entry) in entries.iter().enumerate() {
        if entry.stream >= n_streams {
            return Err(ValidationError::ScheduleStreamOutOfRange {
                entry: position,
                stream: entry.stream,
                n_streams,
            });
        }

        let previous = match basis {
            PositionBasis::Global => last_global.replace(entry.switch_at),
            PositionBasis::Stream => last_per_stream.insert(entry.stream, entry.switch_at),
        };
        if let Some(previous) = previous {
            if entry.switch_at < previous {
                return Err(ValidationError::ScheduleNotMonotonic {
                    entry: position,
                    switch_at: entry.switch_at,
                    previous,
                });
            }
        }
    }

    Ok(())
}
