//! Windowed metric tracking
//!
//! Each stream owns a [`StreamMetrics`] that accumulates label pairs over one
//! reporting window and carries elapsed time across scheduler switches.

mod metrics;
mod record;


pub use metrics::StreamMetrics;
pub use record::{MetricRecord, TreeCounts, WindowReport, RECORD_HEADER};
