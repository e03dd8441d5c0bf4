//! Output sinks
//!
//! Every stream writes its metric records to its own [`MetricsSink`]; drift
//! proximity values go to a single optional [`DriftAccuracySink`]. Sinks are
//! append-only and write through, so partial output survives an aborted run.

mod csv_file;
mod error;
mod in_memory;
mod traits;

pub use csv_file::{CsvFileSink, DriftLogFile};
pub use error::{SinkError, SinkResult};
pub use in_memory::{InMemoryDriftLog, InMemorySink};
pub use traits::{DriftAccuracySink, MetricsSink};
