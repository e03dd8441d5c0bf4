//! In-memory sinks

use super::error::SinkResult;
use super::traits::{DriftAccuracySink, MetricsSink};
use crate::eval::MetricRecord;

/// Collects metric records in memory
#[derive(Debug, Default, Clone)]
pub struct InMemorySink {
    records: Vec<MetricRecord>,
    flushes: usize,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records written so far
    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    /// Record counts, in write order
    pub fn counts(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.count).collect()
    }

    /// Number of explicit flushes
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl MetricsSink for InMemorySink {
    fn write_record(&mut self, record: &MetricRecord) -> SinkResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Collects drift-proximity accuracies in memory
#[derive(Debug, Default, Clone)]
pub struct InMemoryDriftLog {
    values: Vec<f64>,
}

impl InMemoryDriftLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl DriftAccuracySink for InMemoryDriftLog {
    fn write_accuracy(&mut self, accuracy: f64) -> SinkResult<()> {
        self.values.push(accuracy);
        Ok(())
    }
}
