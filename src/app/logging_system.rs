use super::config::TracingLevel;
use crate::domain::RelayError;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber for relay diagnostics.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies. Only the
/// first call installs a subscriber; later calls are no-ops.
pub fn setup_diagnostics(level: TracingLevel) -> Result<(), RelayError> {
    static INIT: Once = Once::new();
    let mut result = Ok(());

    INIT.call_once(|| {
        result = install(level);
    });

    result
}

fn install(level: TracingLevel) -> Result<(), RelayError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level.as_str()).map_err(|e| {
            RelayError::Logging(format!("failed to build filter '{}': {e}", level.as_str()))
        })?,
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| RelayError::Logging(format!("failed to set global subscriber: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_diagnostics_is_idempotent() {
        // Another test (or harness) may already have installed a subscriber;
        // either way repeated calls must not panic or error.
        assert!(setup_diagnostics(TracingLevel::Info).is_ok());
        assert!(setup_diagnostics(TracingLevel::Debug).is_ok());
    }
}
