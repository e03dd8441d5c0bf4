//! Run command implementation

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classifier::{MajorityClassClassifier, StreamClassifier};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_spec, resolve_config, EvalSpec, OutputFormat, RunArgs};
use crate::error::{Error, Result};
use crate::eval::{PrequentialEvaluator, RunSummary};
use crate::sink::{CsvFileSink, DriftAccuracySink, DriftLogFile};

/// Snapshot of the effective specification, written next to the results
pub const SNAPSHOT_FILE: &str = "config.yaml";

/// One drift-proximity accuracy per line
pub const DRIFT_LOG_FILE: &str = "drift-accuracy.log";

/// Per-stream metrics file inside the output directory
pub fn stream_file(output_dir: &Path, stream: usize) -> PathBuf {
    output_dir.join(format!("stream-{stream}.csv"))
}

#[derive(Serialize)]
struct RunSnapshot<'a> {
    started_at: String,
    #[serde(flatten)]
    spec: &'a EvalSpec,
}

/// Run the evaluation described by `spec` with the majority-class baseline
///
/// Writes the configuration snapshot, one CSV per stream and, when drift
/// onsets are configured, the drift log into `spec.output_dir`.
pub fn execute(spec: &EvalSpec) -> Result<RunSummary> {
    let config = resolve_config(spec)?;
    let output_dir = &spec.output_dir;
    fs::create_dir_all(output_dir).map_err(|e| {
        Error::io(format!("creating output directory {}", output_dir.display()), e)
    })?;
    write_snapshot(spec)?;

    let mut classifier = MajorityClassClassifier::new();
    for (index, stream) in spec.streams.iter().enumerate() {
        classifier.init_data_source(index, &stream.path)?;
    }

    let mut sinks = (0..spec.streams.len())
        .map(|index| CsvFileSink::create(stream_file(output_dir, index)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let mut drift_log = if config.tracks_drift() {
        Some(DriftLogFile::create(output_dir.join(DRIFT_LOG_FILE))?)
    } else {
        None
    };

    let mut evaluator = PrequentialEvaluator::new(config, classifier, spec.streams.len())?;
    evaluator.run(&mut sinks, drift_log.as_mut().map(|file| file as &mut dyn DriftAccuracySink))
}

fn write_snapshot(spec: &EvalSpec) -> Result<()> {
    let snapshot = RunSnapshot { started_at: chrono::Utc::now().to_rfc3339(), spec };
    let yaml = serde_yaml::to_string(&snapshot)
        .map_err(|e| Error::ConfigError(format!("Failed to serialize config snapshot: {e}")))?;
    let path = spec.output_dir.join(SNAPSHOT_FILE);
    fs::write(&path, yaml).map_err(|e| Error::io(format!("writing {}", path.display()), e))
}

pub fn run_eval(args: RunArgs, level: LogLevel) -> std::result::Result<(), String> {
    log(level, LogLevel::Normal, &format!("Loading config: {}", args.config.display()));

    let mut spec = load_spec(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Streams: {}\n  Policy: {:?}\n  Sample freq: {}\n  Output dir: {}",
            spec.streams.len(),
            spec.schedule.policy,
            spec.sample_freq,
            spec.output_dir.display()
        ),
    );

    let summary = execute(&spec).map_err(|e| format!("Evaluation failed: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "✓ Evaluation complete");
            log(level, LogLevel::Normal, summary.to_string().trim_end());
            log(
                level,
                LogLevel::Normal,
                &format!("Results written to {}", spec.output_dir.display()),
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&summary)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
