//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Streams: {}", spec.streams.len());
            for (index, stream) in spec.streams.iter().enumerate() {
                println!("  [{index}] {}", stream.path.display());
            }
            println!("Schedule: {:?}", spec.schedule.policy);
            println!("Position basis: {}", spec.position_basis);
            println!("Sample freq: {}", spec.sample_freq);
            if let Some(max) = spec.max_instances {
                println!("Max instances: {max}");
            }
            println!("Output dir: {}", spec.output_dir.display());

            if spec.has_drift() {
                println!("Drift tracking: enabled");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
