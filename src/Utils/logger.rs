//! Logging backend for the binary.
//!
//! Library code only uses the `log` macros; this module installs simplelog.
//! Terminal output goes to stderr so that reports on stdout stay clean. An
//! optional log file receives the same records.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::PathBuf;

pub const LOG_ENV_VAR: &str = "NOZZLE_LOG";
pub const LOG_FILE_ENV_VAR: &str = "NOZZLE_LOG_FILE";

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl LogSettings {
    /// Level from `NOZZLE_LOG` when it is set and valid, log file from `NOZZLE_LOG_FILE`
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LOG_ENV_VAR).ok().as_deref(),
            std::env::var(LOG_FILE_ENV_VAR).ok().as_deref(),
        )
    }

    pub fn from_values(level: Option<&str>, log_file: Option<&str>) -> Self {
        let mut settings = Self::default();
        if let Some(level) = level.and_then(parse_level) {
            settings.level = level;
        }
        settings.log_file = log_file
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        settings
    }
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Installs the global logger. A second call, or a log file that cannot be
/// created, only prints a warning: the run goes on without that sink.
pub fn init_logging(settings: &LogSettings) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        settings.level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = &settings.log_file {
        match File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(settings.level, config, file)),
            Err(e) => eprintln!("cannot create log file {:?}: {}", path, e),
        }
    }
    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("logger already initialized: {}", e);
    }
}
