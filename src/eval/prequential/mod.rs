//! Prequential evaluation loop
//!
//! One loop serves every scheduling policy: single stream, explicit
//! interleaving and sequential exhaustion are all [`SchedulePolicy`]
//! choices.
//!
//! [`SchedulePolicy`]: crate::eval::SchedulePolicy

mod config;
mod evaluator;
mod summary;

#[cfg(test)]
mod tests;

pub use config::{EvalConfig, DEFAULT_SAMPLE_FREQ};
pub use evaluator::PrequentialEvaluator;
pub use summary::{RunSummary, StreamSummary, Termination};
