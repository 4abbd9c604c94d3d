//! Configuration for the scroll CLI

use crate::output::OutputFormat;
use scroll_audit::DEFAULT_LOG_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Ceremony log and diagnostics
    #[serde(default)]
    pub log: LogConfig,

    /// Report rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Ceremony log file
    #[serde(default = "default_log_file")]
    pub file: Option<PathBuf>,

    /// Timestamp each ceremony log line
    #[serde(default = "default_true")]
    pub timestamps: bool,

    /// Diagnostic log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            timestamps: true,
            level: default_log_level(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format for every command; unset means each command's own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_LOG_FILE))
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ScrollConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `SCROLL_`-prefixed environment variables (`SCROLL_LOG__LEVEL=debug`).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&ScrollConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SCROLL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
