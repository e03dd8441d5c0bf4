//! Labeled instance stream read from a CSV file

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::Label;

/// One labeled instance
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub features: Vec<f64>,
    pub label: Label,
}

/// Forward-only reader over a CSV stream
///
/// The first row is a header. Every following row holds numeric features with
/// the class label in the last column.
pub struct CsvStream {
    path: PathBuf,
    reader: csv::Reader<File>,
    record: csv::StringRecord,
    n_columns: usize,
    position: u64,
}

impl CsvStream {
    /// Open a stream and read its header
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(Error::data_source(&path, "file not found"));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(|e| Error::data_source(&path, e.to_string()))?;
        let n_columns =
            reader.headers().map_err(|e| Error::data_source(&path, e.to_string()))?.len();
        if n_columns == 0 {
            return Err(Error::data_source(&path, "header row is empty"));
        }

        Ok(Self { path, reader, record: csv::StringRecord::new(), n_columns, position: 0 })
    }

    /// Path the stream was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of columns, label included
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Instances read so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read the next instance, or `None` at end of file
    pub fn next_instance(&mut self) -> Result<Option<Instance>> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(|e| Error::data_source(&self.path, e.to_string()))?;
        if !more {
            return Ok(None);
        }
        self.position += 1;

        let row = self.position;
        let fields: Vec<&str> = self.record.iter().collect();
        let Some((label_field, feature_fields)) = fields.split_last() else {
            return Err(Error::data_source(&self.path, format!("row {row} is empty")));
        };

        let label = parse_label(label_field).ok_or_else(|| {
            Error::data_source(&self.path, format!("row {row}: invalid class label '{label_field}'"))
        })?;
        let features = feature_fields
            .iter()
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    Error::data_source(&self.path, format!("row {row}: non-numeric feature '{field}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Instance { features, label }))
    }
}

/// Parse a class label written as a non-negative integer (`3` or `3.0`)
fn parse_label(field: &str) -> Option<Label> {
    if let Ok(label) = field.parse::<Label>() {
        return Some(label);
    }
    let value = field.parse::<f64>().ok()?;
    (value >= 0.0 && value.fract() == 0.0 && value.is_finite()).then_some(value as Label)
}
