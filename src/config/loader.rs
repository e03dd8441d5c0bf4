//! Loading evaluation specifications and their companion files

use std::fs;
use std::path::Path;

use crate::config::schema::{EvalSpec, PolicyKind};
use crate::config::validate::validate_spec;
use crate::error::{Error, Result};
use crate::eval::{EvalConfig, ScheduleEntry, SchedulePolicy};

/// Load and parse a YAML evaluation specification
///
/// The result is parsed only; call [`validate_spec`] or [`resolve_config`]
/// before running it.
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<EvalSpec> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    parse_spec(&content)
}

/// Parse a YAML evaluation specification from a string
pub fn parse_spec(content: &str) -> Result<EvalSpec> {
    serde_yaml::from_str(content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
}

/// Validate `spec`, read the files it references and build the loop configuration
pub fn resolve_config(spec: &EvalSpec) -> Result<EvalConfig> {
    validate_spec(spec)?;

    let policy = match spec.schedule.policy {
        PolicyKind::Sequential => SchedulePolicy::Sequential,
        PolicyKind::Explicit => match (&spec.schedule.file, &spec.schedule.entries) {
            (Some(file), _) => SchedulePolicy::Explicit(read_schedule_file(file)?),
            (None, Some(entries)) => SchedulePolicy::explicit(entries.iter().copied()),
            (None, None) => SchedulePolicy::Explicit(Vec::new()),
        },
    };

    let mut config = EvalConfig::new(spec.sample_freq)
        .with_policy(policy)
        .with_position_basis(spec.position_basis);
    if let Some(max) = spec.max_instances {
        config = config.with_max_instances(max);
    }

    for (index, stream) in spec.streams.iter().enumerate() {
        let onsets = match (&stream.drift_log, &stream.drift_locations) {
            (Some(log), _) => read_drift_log(log)?,
            (None, Some(onsets)) => onsets.clone(),
            (None, None) => continue,
        };
        config = config.with_drift_locations(index, onsets);
    }

    config.validate(spec.streams.len())?;
    Ok(config)
}

/// Read a schedule file of `stream switch_at` lines
pub fn read_schedule_file<P: AsRef<Path>>(path: P) -> Result<Vec<ScheduleEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read schedule file {}: {e}", path.display()))
    })?;
    parse_schedule(&content, path)
}

/// Parse schedule lines; blank lines are skipped
///
/// `source` only names the origin in error messages.
pub fn parse_schedule(content: &str, source: &Path) -> Result<Vec<ScheduleEntry>> {
    let mut entries = Vec::new();
    for (line_no, line) in numbered_lines(content) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [stream, switch_at] = fields.as_slice() else {
            return Err(line_error(source, line_no, "expected `stream switch_at`"));
        };
        let stream = stream
            .parse()
            .map_err(|_| line_error(source, line_no, &format!("invalid stream index '{stream}'")))?;
        let switch_at = switch_at.parse().map_err(|_| {
            line_error(source, line_no, &format!("invalid switch position '{switch_at}'"))
        })?;
        entries.push(ScheduleEntry::new(stream, switch_at));
    }
    Ok(entries)
}

/// Read a drift log of one onset position per line
pub fn read_drift_log<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read drift log {}: {e}", path.display()))
    })?;
    parse_drift_log(&content, path)
}

/// Parse drift onset lines; blank lines are skipped
pub fn parse_drift_log(content: &str, source: &Path) -> Result<Vec<u64>> {
    numbered_lines(content)
        .map(|(line_no, line)| {
            line.parse()
                .map_err(|_| line_error(source, line_no, &format!("invalid drift position '{line}'")))
        })
        .collect()
}

fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn line_error(source: &Path, line_no: usize, message: &str) -> Error {
    Error::ConfigError(format!("{}:{line_no}: {message}", source.display()))
}
