//! Prequential evaluation engine
//!
//! ## Architecture
//!
//! - `window`: per-stream windowed accuracy/kappa and elapsed time
//! - `classification`: confusion matrix and Cohen's kappa
//! - `drift`: accuracy over the interval following known drift onsets
//! - `schedule`: which stream the classifier is fed, and when to switch
//! - `prequential`: the test-then-train loop tying them together
//! - `clock`: time sources for elapsed-time accounting

pub mod classification;
pub mod clock;
pub mod drift;
pub mod prequential;
pub mod schedule;
pub mod window;

pub use classification::{cohen_kappa, ConfusionMatrix};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use drift::{DriftProximityTracker, DRIFT_INTERVAL};
pub use prequential::{
    EvalConfig, PrequentialEvaluator, RunSummary, StreamSummary, Termination, DEFAULT_SAMPLE_FREQ,
};
pub use schedule::{
    validate_schedule, PositionBasis, ScheduleEntry, SchedulePolicy, SchedulerState,
    StreamScheduler, Transition,
};
pub use window::{MetricRecord, StreamMetrics, TreeCounts, WindowReport, RECORD_HEADER};
