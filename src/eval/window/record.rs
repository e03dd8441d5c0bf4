//! Metric record emitted once per reporting window

use serde::{Deserialize, Serialize};

/// CSV header written at the top of every per-stream sink
pub const RECORD_HEADER: [&str; 7] = [
    "count",
    "accuracy",
    "kappa",
    "candidate_tree_size",
    "transferred_tree_count",
    "tree_pool_size",
    "time",
];

/// One reported window for one stream
///
/// `count` is the stream's cumulative instance counter at report time, not
/// the window length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub count: u64,
    pub accuracy: f64,
    pub kappa: f64,
    #[serde(rename = "candidate_tree_size")]
    pub candidate_tree_count: usize,
    pub transferred_tree_count: usize,
    pub tree_pool_size: usize,
    /// Seconds spent on this stream across all of its activations
    #[serde(rename = "time")]
    pub elapsed_secs: f64,
}

/// The classifier-independent part of a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowReport {
    pub count: u64,
    pub accuracy: f64,
    pub kappa: f64,
}

/// Introspection values sampled from the classifier at report time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCounts {
    pub candidate: usize,
    pub transferred: usize,
    pub pool: usize,
}

impl MetricRecord {
    /// Combine a window report with classifier introspection and timing
    pub fn new(window: WindowReport, trees: TreeCounts, elapsed_secs: f64) -> Self {
        Self {
            count: window.count,
            accuracy: window.accuracy,
            kappa: window.kappa,
            candidate_tree_count: trees.candidate,
            transferred_tree_count: trees.transferred,
            tree_pool_size: trees.pool,
            elapsed_secs,
        }
    }
}
