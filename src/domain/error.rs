use thiserror::Error;

/// Top-level error type for relay setup.
///
/// The emit path itself is infallible; errors only arise while parsing
/// configuration, installing diagnostics, or reading demo input.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Logging init error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
