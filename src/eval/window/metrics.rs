//! Per-stream windowed metric state

use std::time::Duration;

use super::record::WindowReport;
use crate::eval::classification::{kappa_from_matrix, ConfusionMatrix};
use crate::Label;

/// Windowed accuracy/kappa tracker for one stream
///
/// The instance counter and elapsed-time accumulator live for the whole run;
/// the correct count and label lists are cleared on every report.
#[derive(Debug, Clone, Default)]
pub struct StreamMetrics {
    instance_count: u64,
    correct: u64,
    window_actual: Vec<Label>,
    window_predicted: Vec<Label>,
    window_start: Option<Duration>,
    accumulated: Duration,
}

impl StreamMetrics {
    /// Create an empty tracker with no activation in progress
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one prediction against its ground-truth label
    pub fn observe(&mut self, predicted: Label, actual: Label) {
        self.instance_count += 1;
        if predicted == actual {
            self.correct += 1;
        }
        self.window_actual.push(actual);
        self.window_predicted.push(predicted);
    }

    /// True iff the instance counter is a positive multiple of `sample_freq`
    pub fn should_report(&self, sample_freq: u64) -> bool {
        sample_freq > 0 && self.instance_count > 0 && self.instance_count % sample_freq == 0
    }

    /// Compute accuracy and kappa for the current window, then clear it
    ///
    /// Accuracy is taken over `sample_freq`, not over the window length, so a
    /// report is only meaningful when [`should_report`](Self::should_report)
    /// holds. A zero `sample_freq` yields zero accuracy.
    pub fn report_and_reset(&mut self, sample_freq: u64) -> WindowReport {
        let accuracy =
            if sample_freq == 0 { 0.0 } else { self.correct as f64 / sample_freq as f64 };
        let matrix = ConfusionMatrix::from_predictions(&self.window_predicted, &self.window_actual);
        let kappa = kappa_from_matrix(&matrix);

        self.correct = 0;
        self.window_actual.clear();
        self.window_predicted.clear();

        WindowReport { count: self.instance_count, accuracy, kappa }
    }

    /// Start a new activation at `now`
    pub fn resume(&mut self, now: Duration) {
        self.window_start = Some(now);
    }

    /// End the current activation, folding its duration into the accumulator
    pub fn suspend(&mut self, now: Duration) {
        if let Some(start) = self.window_start.take() {
            self.accumulated += now.saturating_sub(start);
        }
    }

    /// Accumulated time plus the time spent in the current activation
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.window_start {
            Some(start) => self.accumulated + now.saturating_sub(start),
            None => self.accumulated,
        }
    }

    /// Whether an activation is in progress
    pub fn is_active(&self) -> bool {
        self.window_start.is_some()
    }

    /// Cumulative instances observed on this stream
    pub fn instance_count(&self) -> u64 {
        self.instance_count
    }

    /// Correct predictions in the current window
    pub fn correct(&self) -> u64 {
        self.correct
    }

    /// Actual labels in the current window
    pub fn window_actual(&self) -> &[Label] {
        &self.window_actual
    }

    /// Predicted labels in the current window
    pub fn window_predicted(&self) -> &[Label] {
        &self.window_predicted
    }
}
