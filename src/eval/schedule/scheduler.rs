//! Stream scheduler state machine

use std::collections::VecDeque;

use super::policy::{validate_schedule, PositionBasis, ScheduleEntry, SchedulePolicy};
use crate::config::ValidationError;

/// Scheduler lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Nothing has been activated yet
    NoActiveStream,
    /// The given stream receives the next instance request
    StreamActive(usize),
    /// Terminal
    Finished,
}

/// Change of active stream reported to the evaluation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `to` is now active; `from` was active before, if anything was
    Activated { from: Option<usize>, to: usize },
    /// The run is over; `from` was the last active stream
    Finished { from: Option<usize> },
}

/// Decides which stream is fed to the classifier
///
/// The scheduler owns the position counters used for switching. The loop
/// calls [`record_instance`](Self::record_instance) after every processed
/// instance and [`on_exhausted`](Self::on_exhausted) when the active stream
/// runs dry.
#[derive(Debug, Clone)]
pub struct StreamScheduler {
    sequential: bool,
    pending: VecDeque<ScheduleEntry>,
    switch_at: Option<u64>,
    n_streams: usize,
    basis: PositionBasis,
    state: SchedulerState,
    global_position: u64,
    stream_positions: Vec<u64>,
    activations: usize,
}

impl StreamScheduler {
    /// Build a scheduler over `n_streams` streams
    pub fn new(
        policy: SchedulePolicy,
        n_streams: usize,
        basis: PositionBasis,
    ) -> Result<Self, ValidationError> {
        let (sequential, pending) = match policy {
            SchedulePolicy::Sequential => (true, VecDeque::new()),
            SchedulePolicy::Explicit(entries) => {
                validate_schedule(&entries, n_streams, basis)?;
                (false, entries.into())
            }
        };

        Ok(Self {
            sequential,
            pending,
            switch_at: None,
            n_streams,
            basis,
            state: SchedulerState::NoActiveStream,
            global_position: 0,
            stream_positions: vec![0; n_streams],
            activations: 0,
        })
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Currently active stream, if any
    pub fn active(&self) -> Option<usize> {
        match self.state {
            SchedulerState::StreamActive(stream) => Some(stream),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == SchedulerState::Finished
    }

    /// Number of activations performed so far
    pub fn activations(&self) -> usize {
        self.activations
    }

    /// Schedule entries not yet consumed
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Instances processed across all streams
    pub fn global_position(&self) -> u64 {
        self.global_position
    }

    /// Instances processed on `stream`
    pub fn stream_position(&self, stream: usize) -> u64 {
        self.stream_positions.get(stream).copied().unwrap_or(0)
    }

    /// Position of `stream` under the configured basis
    pub fn position(&self, stream: usize) -> u64 {
        match self.basis {
            PositionBasis::Global => self.global_position,
            PositionBasis::Stream => self.stream_position(stream),
        }
    }

    /// Start the run or switch streams when a switch position is reached
    ///
    /// Returns `None` when nothing changed. Several due switches collapse into
    /// one transition.
    pub fn poll(&mut self) -> Option<Transition> {
        let from = match self.state {
            SchedulerState::Finished => return None,
            SchedulerState::NoActiveStream => None,
            SchedulerState::StreamActive(stream) => Some(stream),
        };

        let mut changed = false;
        if from.is_none() {
            self.start();
            changed = true;
        }
        while let SchedulerState::StreamActive(current) = self.state {
            if !self.switch_due(current) {
                break;
            }
            self.advance_schedule();
            changed = true;
        }

        changed.then(|| self.transition_from(from))
    }

    /// Count one processed instance for the active stream
    pub fn record_instance(&mut self) {
        if let SchedulerState::StreamActive(stream) = self.state {
            self.global_position += 1;
            if let Some(position) = self.stream_positions.get_mut(stream) {
                *position += 1;
            }
        }
    }

    /// The active stream has no more instances
    ///
    /// Explicit schedules move on to the next entry; the sequential policy
    /// moves to the next stream index. Either finishes when nothing is left.
    pub fn on_exhausted(&mut self) -> Option<Transition> {
        let SchedulerState::StreamActive(current) = self.state else {
            return None;
        };

        if self.sequential {
            let next = current + 1;
            if next < self.n_streams {
                self.activate(next);
            } else {
                self.state = SchedulerState::Finished;
            }
        } else {
            self.advance_schedule();
        }

        Some(self.transition_from(Some(current)))
    }

    fn start(&mut self) {
        if self.sequential {
            if self.n_streams == 0 {
                self.state = SchedulerState::Finished;
            } else {
                self.activate(0);
            }
        } else {
            self.advance_schedule();
        }
    }

    fn switch_due(&self, current: usize) -> bool {
        !self.pending.is_empty() && self.switch_at.is_some_and(|at| self.position(current) >= at)
    }

    fn advance_schedule(&mut self) {
        match self.pending.pop_front() {
            Some(entry) => {
                self.switch_at = Some(entry.switch_at);
                self.activate(entry.stream);
            }
            None => self.state = SchedulerState::Finished,
        }
    }

    fn activate(&mut self, stream: usize) {
        self.state = SchedulerState::StreamActive(stream);
        self.activations += 1;
    }

    fn transition_from(&self, from: Option<usize>) -> Transition {
        match self.state {
            SchedulerState::StreamActive(to) => Transition::Activated { from, to },
            _ => Transition::Finished { from },
        }
    }
}
