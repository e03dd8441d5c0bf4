//! Evaluar: prequential evaluation for online classifiers
//!
//! Runs an online classifier over one or more labeled data streams with the
//! test-then-train protocol. Several streams can be multiplexed onto one
//! classifier instance, either by an explicit switch schedule or by draining
//! each stream in turn.
//!
//! ## Architecture
//!
//! - `classifier`: capability trait the evaluator drives, plus a majority-class
//!   baseline and a scripted replay classifier
//! - `data`: CSV-backed labeled instance streams
//! - `eval`: windowed metrics, kappa, drift-proximity tracking, the stream
//!   scheduler and the prequential evaluation loop
//! - `sink`: append-only outputs for metric records and drift accuracy
//! - `config`: YAML run specification, validation and CLI arguments
//! - `cli`: command handlers for the `evaluar` binary
//!
//! ## Example
//!
//! ```
//! use evaluar::classifier::ReplayClassifier;
//! use evaluar::eval::{EvalConfig, PrequentialEvaluator, SchedulePolicy};
//! use evaluar::sink::InMemorySink;
//!
//! // Two streams: stream 0 has 250 instances, stream 1 has 100.
//! let classifier = ReplayClassifier::new(vec![
//!     vec![(1, 1); 250],
//!     vec![(0, 0); 100],
//! ]);
//! let config = EvalConfig::new(100).with_policy(SchedulePolicy::Sequential);
//! let mut evaluator = PrequentialEvaluator::new(config, classifier, 2)?;
//!
//! let mut sinks = vec![InMemorySink::new(), InMemorySink::new()];
//! let summary = evaluator.run(&mut sinks, None)?;
//!
//! assert_eq!(summary.instances_processed, 350);
//! assert_eq!(sinks[0].records().len(), 2);
//! assert_eq!(sinks[1].records().len(), 1);
//! # Ok::<(), evaluar::Error>(())
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod sink;

pub use error::{Error, Result};

/// Class label as produced by classifiers and data sources
pub type Label = usize;
