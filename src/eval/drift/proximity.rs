//! Accuracy in the interval following each known drift onset

use std::collections::VecDeque;

/// Length of the post-drift interval, in instances
pub const DRIFT_INTERVAL: u64 = 1000;

/// Tracks accuracy over the [`DRIFT_INTERVAL`] instances after each onset
///
/// Positions strictly between the onset and `onset + DRIFT_INTERVAL` count,
/// so a fully correct interval reports `0.999`. Only the head of the onset queue is tracked. When two onsets are closer
/// than one interval, the second interval starts once the first has resolved.
#[derive(Debug, Clone, Default)]
pub struct DriftProximityTracker {
    onsets: VecDeque<u64>,
    interval_correct: u64,
    resolved: usize,
}

impl DriftProximityTracker {
    /// Create a tracker from ascending onset positions
    ///
    /// An empty sequence yields an inert tracker.
    pub fn new(onsets: impl IntoIterator<Item = u64>) -> Self {
        Self { onsets: onsets.into_iter().collect(), interval_correct: 0, resolved: 0 }
    }

    /// Observe one prediction at `position`
    ///
    /// Returns the interval accuracy when the head onset resolves. The
    /// resolve check runs before the increment check, with the same position.
    pub fn observe(&mut self, position: u64, predicted_correct: bool) -> Option<f64> {
        let mut emitted = None;

        if let Some(&head) = self.onsets.front() {
            if position > head + DRIFT_INTERVAL {
                self.onsets.pop_front();
                emitted = Some(self.interval_correct as f64 / DRIFT_INTERVAL as f64);
                self.interval_correct = 0;
                self.resolved += 1;
            }
        }

        if let Some(&head) = self.onsets.front() {
            if head < position && position < head + DRIFT_INTERVAL && predicted_correct {
                self.interval_correct += 1;
            }
        }

        emitted
    }

    /// Onsets not yet resolved
    pub fn pending(&self) -> impl Iterator<Item = u64> + '_ {
        self.onsets.iter().copied()
    }

    /// Correct predictions in the current interval
    pub fn interval_correct(&self) -> u64 {
        self.interval_correct
    }

    /// Number of intervals resolved so far
    pub fn resolved(&self) -> usize {
        self.resolved
    }

    /// True when there is nothing left to track
    pub fn is_inert(&self) -> bool {
        self.onsets.is_empty()
    }
}
