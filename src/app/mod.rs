pub mod config;
pub mod logging_system;

pub use config::{Config, ConfigError, TracingLevel};
pub use logging_system::setup_diagnostics;

use crate::domain::{LogRecord, RelayError};
use crate::logger::Logger;
use crate::sink::ConsoleSink;
use std::io::{self, BufRead};
use std::process;
use std::sync::Arc;
use tracing::{error, info};

impl From<ConfigError> for RelayError {
    fn from(e: ConfigError) -> Self {
        RelayError::Config(e.to_string())
    }
}

/// The demo application: wires a chain from configuration and feeds it one
/// record per stdin line.
pub struct App {
    config: Config,
    logger: Logger,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, RelayError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args(args)?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, RelayError> {
        // Load config file if specified
        let config = if let Some(config_file) = &config.config_file {
            eprintln!("Loading configuration from file: {}", config_file.display());
            Config::from_file(config_file)?
        } else {
            config
        };

        setup_diagnostics(config.log_level)?;

        let head = Arc::new(
            ConsoleSink::for_target(config.console)
                .format(config.format)
                .cause_style(config.cause_style),
        );
        let logger = Logger::new();
        logger.set_head(head);

        info!(
            "log-relay v{} ready (console={:?}, format={:?}, severity={})",
            crate::VERSION,
            config.console,
            config.format,
            config.severity
        );

        Ok(Self { config, logger })
    }

    /// Forward each stdin line through the chain as one record.
    pub fn run(&self) -> Result<(), RelayError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            self.relay_line(line?);
        }
        Ok(())
    }

    fn relay_line(&self, line: String) {
        let mut record = LogRecord::new(self.config.severity, line);
        if let Some(tag) = &self.config.tag {
            record = record.with_tag(tag.clone());
        }
        self.logger.log(&record);
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Main entry point for the binary
pub fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().collect();

    // Handle version flag specially
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-V") {
        println!("log-relay {}", get_version());
        return Ok(());
    }

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        use clap::Parser;
        Config::parse_from(["log-relay", "--help"]);
        return Ok(());
    }

    match App::from_args(args) {
        Ok(app) => {
            if let Err(e) = app.run() {
                error!("Relay error: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Configuration error: {e}");
            eprintln!("log-relay: {e}");
            process::exit(1);
        }
    }

    Ok(())
}
