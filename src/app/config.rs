use crate::domain::Severity;
use crate::sink::{CauseStyle, ConsoleFormat, ConsoleTarget};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Level for the crate's own tracing diagnostics.
///
/// This is distinct from `Severity`: `TracingLevel` configures the relay's
/// infrastructure logging, `Severity` is the payload level carried by records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl TracingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TracingLevel::Error => "error",
            TracingLevel::Warn => "warn",
            TracingLevel::Info => "info",
            TracingLevel::Debug => "debug",
            TracingLevel::Trace => "trace",
        }
    }
}

impl From<TracingLevel> for tracing::Level {
    fn from(level: TracingLevel) -> Self {
        match level {
            TracingLevel::Error => tracing::Level::ERROR,
            TracingLevel::Warn => tracing::Level::WARN,
            TracingLevel::Info => tracing::Level::INFO,
            TracingLevel::Debug => tracing::Level::DEBUG,
            TracingLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Console target for the head node (stdout or stderr)
    #[arg(long, env = "RELAY_CONSOLE", default_value = "stdout")]
    pub console: ConsoleTarget,

    /// Line format written by the console node (text or json)
    #[arg(long, env = "RELAY_FORMAT", default_value = "text")]
    pub format: ConsoleFormat,

    /// How a record's cause is rendered (append or ignore)
    #[arg(long, env = "RELAY_CAUSE_STYLE", default_value = "append")]
    pub cause_style: CauseStyle,

    /// Severity assigned to piped input lines
    #[arg(long, env = "RELAY_SEVERITY", default_value = "info")]
    pub severity: Severity,

    /// Tag attached to piped input lines
    #[arg(long, env = "RELAY_TAG")]
    pub tag: Option<String>,

    /// Level for the relay's own diagnostics
    #[arg(long, env = "RELAY_LOG_LEVEL", default_value = "info")]
    pub log_level: TracingLevel,

    /// Configuration file path (optional)
    #[arg(long, env = "RELAY_CONFIG_FILE")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            console: ConsoleTarget::Stdout,
            format: ConsoleFormat::Text,
            cause_style: CauseStyle::Append,
            severity: Severity::Info,
            tag: None,
            log_level: TracingLevel::Info,
            config_file: None,
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args).map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
