//! File-backed sinks

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::SinkResult;
use super::traits::{DriftAccuracySink, MetricsSink};
use crate::eval::{MetricRecord, RECORD_HEADER};

/// Per-stream CSV file of metric records
///
/// The header is written when the file is created. Every record is flushed
/// as soon as it is written, so an interrupted run leaves a valid prefix.
pub struct CsvFileSink {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl CsvFileSink {
    /// Create (or truncate) `path` and write the header row
    pub fn create<P: AsRef<Path>>(path: P) -> SinkResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(&path)?;
        writer.write_record(RECORD_HEADER)?;
        writer.flush()?;
        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetricsSink for CsvFileSink {
    fn write_record(&mut self, record: &MetricRecord) -> SinkResult<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Text file with one drift-proximity accuracy per line
pub struct DriftLogFile {
    path: PathBuf,
    file: File,
}

impl DriftLogFile {
    /// Create (or truncate) `path`
    pub fn create<P: AsRef<Path>>(path: P) -> SinkResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DriftAccuracySink for DriftLogFile {
    fn write_accuracy(&mut self, accuracy: f64) -> SinkResult<()> {
        writeln!(self.file, "{accuracy}")?;
        self.file.flush()?;
        Ok(())
    }
}
