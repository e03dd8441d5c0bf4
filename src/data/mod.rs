//! Labeled data streams
//!
//! Streams are read forward-only, one instance at a time, so arbitrarily long
//! files can be evaluated without loading them into memory.

mod csv_stream;

pub use csv_stream::{CsvStream, Instance};
