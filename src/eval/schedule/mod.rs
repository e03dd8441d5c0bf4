//! Stream scheduling
//!
//! Chooses which logical stream the classifier serves at each step. Two
//! policies share one state machine:
//!
//! - `Explicit`: a precomputed list of `(stream, switch_at)` entries that
//!   simulates streams arriving concurrently
//! - `Sequential`: each stream is drained before the next one starts

mod policy;
mod scheduler;


pub use policy::{validate_schedule, PositionBasis, ScheduleEntry, SchedulePolicy};
pub use scheduler::{SchedulerState, StreamScheduler, Transition};
