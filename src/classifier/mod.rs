//! Classifiers driven by the prequential evaluator
//!
//! The evaluator only talks to [`StreamClassifier`]. Two implementations ship
//! with the crate:
//!
//! - [`MajorityClassClassifier`]: per-stream majority-class baseline over CSV
//!   data sources
//! - [`ReplayClassifier`]: in-memory scripted predictions

mod majority;
mod replay;
mod traits;

#[cfg(test)]
mod tests;

pub use majority::MajorityClassClassifier;
pub use replay::ReplayClassifier;
pub use traits::StreamClassifier;
