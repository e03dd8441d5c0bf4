//! Drift-proximity accuracy
//!
//! Measures how well a classifier recovers after known concept drifts by
//! computing accuracy over a fixed interval after each ground-truth onset.

mod proximity;


pub use proximity::{DriftProximityTracker, DRIFT_INTERVAL};
