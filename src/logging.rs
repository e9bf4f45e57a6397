//! Structured logging setup for the command-line host.
//!
//! The library only emits `tracing` events. Installing a subscriber is left
//! to the binary, which writes everything to stderr so stdout stays clean for
//! generated output and JSON reports.

use crate::error::Result;
use std::env;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log format.
pub const FORMAT_ENV: &str = "AXGEN_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,accessibility_generator=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable output
    #[default]
    Pretty,
}

impl LogFormat {
    /// Parse a format name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Raise the crate's own events to `debug`, ignoring `RUST_LOG`.
    pub verbose: bool,
}

impl LoggingConfig {
    /// Read the format from the environment; unknown values keep the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(format) = env::var(FORMAT_ENV).ok().as_deref().and_then(LogFormat::parse) {
            config.format = format;
        }
        config
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn filter(&self) -> EnvFilter {
        if self.verbose {
            return EnvFilter::new(VERBOSE_FILTER);
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = config.filter();
    let registry = tracing_subscriber::registry();

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_target(true)
                .with_current_span(true)
                .with_filter(filter);
            registry.with(layer).try_init()?;
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_ansi(io::stderr().is_terminal())
                .with_filter(filter);
            registry.with(layer).try_init()?;
        }
    }

    tracing::debug!(format = ?config.format, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("yaml"), None);
    }

    #[test]
    fn test_verbose_builder() {
        let config = LoggingConfig::default().verbose(true);
        assert!(config.verbose);
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
