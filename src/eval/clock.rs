//! Time sources for elapsed-time accounting

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of monotonically non-decreasing timestamps
pub trait Clock {
    /// Time since an arbitrary, fixed origin
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock for tests
///
/// Each call to [`Clock::now`] returns the current reading and then advances
/// it by `tick`.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    tick: Duration,
}

impl ManualClock {
    /// Clock that only moves when [`advance`](Self::advance) is called
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock that advances by `tick` on every reading
    pub fn ticking(tick: Duration) -> Self {
        Self { now: Cell::new(Duration::ZERO), tick }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let reading = self.now.get();
        self.now.set(reading + self.tick);
        reading
    }
}
