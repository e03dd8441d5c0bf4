//! Run summary

use std::fmt;

use serde::Serialize;

/// Why the evaluation loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The scheduler reached its terminal state
    ScheduleExhausted,
    /// The `max_instances` ceiling was reached
    InstanceCeiling,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScheduleExhausted => write!(f, "schedule_exhausted"),
            Self::InstanceCeiling => write!(f, "instance_ceiling"),
        }
    }
}

/// Totals for one stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamSummary {
    pub stream: usize,
    /// Instances observed on this stream
    pub instances: u64,
    /// Metric records written to this stream's sink
    pub records: usize,
    /// Seconds spent on this stream across all activations
    pub elapsed_secs: f64,
}

/// Outcome of [`PrequentialEvaluator::run`](super::PrequentialEvaluator::run)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub policy: String,
    pub instances_processed: u64,
    pub activations: usize,
    pub drift_intervals: usize,
    pub termination: Termination,
    pub streams: Vec<StreamSummary>,
}

impl RunSummary {
    /// Summary of `stream`, if it exists
    pub fn stream(&self, stream: usize) -> Option<&StreamSummary> {
        self.streams.get(stream)
    }

    /// Records written across all streams
    pub fn total_records(&self) -> usize {
        self.streams.iter().map(|s| s.records).sum()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Policy: {}", self.policy)?;
        writeln!(f, "Instances processed: {}", self.instances_processed)?;
        writeln!(f, "Activations: {}", self.activations)?;
        writeln!(f, "Termination: {}", self.termination)?;
        if self.drift_intervals > 0 {
            writeln!(f, "Drift intervals resolved: {}", self.drift_intervals)?;
        }
        writeln!(f, "Streams:")?;
        for s in &self.streams {
            writeln!(
                f,
                "  [{}] instances={} records={} time={:.3}s",
                s.stream, s.instances, s.records, s.elapsed_secs
            )?;
        }
        Ok(())
    }
}
