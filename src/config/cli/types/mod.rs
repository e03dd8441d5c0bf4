//! CLI value types

mod output_format;


pub use output_format::OutputFormat;
