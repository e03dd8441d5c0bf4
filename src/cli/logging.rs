//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Pick a level from the global `--quiet` / `--verbose` flags
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default `tracing` filter for library diagnostics at this level
    ///
    /// `RUST_LOG` takes precedence when set.
    pub fn tracing_filter(self) -> &'static str {
        match self {
            LogLevel::Quiet => "evaluar=error",
            LogLevel::Normal => "evaluar=warn",
            LogLevel::Verbose => "evaluar=info",
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if enabled(level, required) {
        println!("{msg}");
    }
}

fn enabled(level: LogLevel, required: LogLevel) -> bool {
    level != LogLevel::Quiet && (level == required || required == LogLevel::Normal)
}
