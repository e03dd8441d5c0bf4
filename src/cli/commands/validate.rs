//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, resolve_config, validate_spec, EvalSpec, PolicyKind, ValidateArgs};
use crate::eval::{EvalConfig, SchedulePolicy};

/// Format stream configuration as a string
pub fn format_stream_info(spec: &EvalSpec) -> String {
    let mut lines = vec![format!("  Streams: {}", spec.streams.len())];
    for (index, stream) in spec.streams.iter().enumerate() {
        lines.push(format!("    [{index}] {}", stream.path.display()));
        if let Some(log) = &stream.drift_log {
            lines.push(format!("        drift log: {}", log.display()));
        }
        if let Some(onsets) = &stream.drift_locations {
            lines.push(format!("        drift locations: {onsets:?}"));
        }
    }
    lines.join("\n")
}

/// Format schedule configuration as a string
pub fn format_schedule_info(spec: &EvalSpec) -> String {
    let mut lines = vec![format!(
        "  Policy: {}",
        match spec.schedule.policy {
            PolicyKind::Explicit => "explicit",
            PolicyKind::Sequential => "sequential",
        }
    )];
    if spec.schedule.policy == PolicyKind::Explicit {
        if let Some(file) = &spec.schedule.file {
            lines.push(format!("  Schedule file: {}", file.display()));
        }
        if let Some(entries) = &spec.schedule.entries {
            lines.push(format!("  Schedule entries: {}", entries.len()));
        }
    }
    lines.push(format!("  Position basis: {}", spec.position_basis));
    lines.join("\n")
}

/// Format reporting configuration as a string
pub fn format_run_info(spec: &EvalSpec) -> String {
    let mut lines = vec![format!("  Sample freq: {}", spec.sample_freq)];
    if let Some(max) = spec.max_instances {
        lines.push(format!("  Max instances: {max}"));
    }
    lines.push(format!("  Output dir: {}", spec.output_dir.display()));
    lines.join("\n")
}

/// Format what was read from schedule files and drift logs
pub fn format_resolved_info(config: &EvalConfig) -> String {
    let mut lines = Vec::new();
    if let SchedulePolicy::Explicit(entries) = &config.policy {
        lines.push(format!("  Resolved schedule entries: {}", entries.len()));
    }
    for (stream, onsets) in &config.drift_locations {
        lines.push(format!("  Stream {stream} drift onsets: {}", onsets.len()));
    }
    lines.join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &EvalSpec, config: &EvalConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_stream_info(spec));
    println!();
    println!("{}", format_schedule_info(spec));
    println!();
    println!("{}", format_run_info(spec));

    let resolved = format_resolved_info(config);
    if !resolved.is_empty() {
        println!();
        println!("{resolved}");
    }
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(level, LogLevel::Normal, &format!("Validating config: {}", args.config.display()));

    let spec = load_spec(&args.config).map_err(|e| format!("Config error: {e}"))?;

    validate_spec(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    if args.detailed {
        let config = resolve_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;
        log(level, LogLevel::Normal, "Configuration is valid");
        if level != LogLevel::Quiet {
            print_detailed_summary(&spec, &config);
        }
    } else {
        log(level, LogLevel::Normal, "Configuration is valid");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScheduleSpec, StreamSpec};
    use std::path::PathBuf;

    fn make_test_spec() -> EvalSpec {
        let mut spec = EvalSpec::sequential(["/data/0.csv", "/data/1.csv"]);
        spec.streams[0].drift_log = Some(PathBuf::from("/data/drift-0.log"));
        spec.streams[1].drift_locations = Some(vec![8000, 16000]);
        spec.schedule = ScheduleSpec {
            policy: PolicyKind::Explicit,
            file: None,
            entries: Some(vec![(0, 5000), (1, 10000)]),
        };
        spec.max_instances = Some(200000);
        spec.output_dir = PathBuf::from("/results");
        spec
    }

    #[test]
    fn test_format_stream_info() {
        let info = format_stream_info(&make_test_spec());
        assert!(info.contains("Streams: 2"));
        assert!(info.contains("/data/0.csv"));
        assert!(info.contains("/data/drift-0.log"));
        assert!(info.contains("[8000, 16000]"));
    }

    #[test]
    fn test_format_stream_info_no_drift() {
        let mut spec = make_test_spec();
        spec.streams = vec![StreamSpec::new("/data/0.csv")];
        let info = format_stream_info(&spec);
        assert!(!info.contains("drift"));
    }

    #[test]
    fn test_format_schedule_info() {
        let info = format_schedule_info(&make_test_spec());
        assert!(info.contains("explicit"));
        assert!(info.contains("Schedule entries: 2"));
        assert!(info.contains("Position basis: global"));
    }

    #[test]
    fn test_format_schedule_info_sequential() {
        let mut spec = make_test_spec();
        spec.schedule.policy = PolicyKind::Sequential;
        let info = format_schedule_info(&spec);
        assert!(info.contains("sequential"));
        assert!(!info.contains("entries"));
    }

    #[test]
    fn test_format_run_info() {
        let info = format_run_info(&make_test_spec());
        assert!(info.contains("Sample freq: 1000"));
        assert!(info.contains("Max instances: 200000"));
        assert!(info.contains("/results"));
    }

    #[test]
    fn test_format_resolved_info() {
        let config = EvalConfig::new(100)
            .with_policy(SchedulePolicy::explicit([(0usize, 10u64)]))
            .with_drift_locations(0, vec![5, 50]);
        let info = format_resolved_info(&config);
        assert!(info.contains("Resolved schedule entries: 1"));
        assert!(info.contains("Stream 0 drift onsets: 2"));

        assert!(format_resolved_info(&EvalConfig::new(100)).is_empty());
    }
}
