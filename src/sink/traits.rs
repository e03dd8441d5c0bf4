//! Sink trait definitions

use super::error::SinkResult;
use crate::eval::MetricRecord;

/// Append-only destination for one stream's metric records
pub trait MetricsSink {
    /// Append one record; implementations persist it before returning
    fn write_record(&mut self, record: &MetricRecord) -> SinkResult<()>;

    /// Flush pending writes
    fn flush(&mut self) -> SinkResult<()>;
}

/// Append-only destination for drift-proximity accuracy values
pub trait DriftAccuracySink {
    /// Append one resolved interval accuracy
    fn write_accuracy(&mut self, accuracy: f64) -> SinkResult<()>;
}
