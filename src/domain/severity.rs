use crate::domain::RelayError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record carried through the chain.
///
/// This is payload, not infrastructure: it travels with every record from the
/// head of the chain to the last node. It is distinct from `TracingLevel`
/// (used to configure the crate's own diagnostics).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Verbose,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Upper-case label used on console lines, e.g. `INFO/Net: connected`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" | "v" => Ok(Severity::Verbose),
            "debug" | "d" => Ok(Severity::Debug),
            "info" | "i" => Ok(Severity::Info),
            "warn" | "w" => Ok(Severity::Warn),
            "error" | "e" => Ok(Severity::Error),
            other => Err(RelayError::Parse(format!("invalid severity: {other}"))),
        }
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Verbose => tracing::Level::TRACE,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}
