// ABOUTME: Logging configuration and structured logging setup for the tracker
// ABOUTME: Configures log levels, formatters, and the stderr destination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup
//!
//! Diagnostics go to stderr so command output on stdout stays machine-usable.

use anyhow::Result;
use nutrilog_core::constants::service_names;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Multi-field human-readable output
    Pretty,
    /// One short line per event
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::NUTRILOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::NUTRILOG.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
            .add_directive(
                "reqwest=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_reads_format_and_level() {
        env::set_var("LOG_FORMAT", "json");
        env::set_var("RUST_LOG", "debug");
        let config = LoggingConfig::from_env();
        env::remove_var("LOG_FORMAT");
        env::remove_var("RUST_LOG");

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
    }

    #[test]
    #[serial]
    fn test_defaults_are_quiet_and_compact() {
        env::remove_var("LOG_FORMAT");
        env::remove_var("RUST_LOG");
        let config = LoggingConfig::from_env().with_level("info");
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.level, "info");
        assert_eq!(config.service_name, service_names::NUTRILOG);
    }

    #[test]
    #[serial]
    fn test_pretty_format_builds_a_subscriber() {
        env::set_var("LOG_FORMAT", "pretty");
        let config = LoggingConfig::from_env();
        env::remove_var("LOG_FORMAT");
        assert_eq!(config.format, LogFormat::Pretty);

        let layer = fmt::layer().pretty().with_writer(io::stderr);
        let subscriber = tracing_subscriber::registry()
            .with(config.env_filter())
            .with(layer);
        tracing::subscriber::with_default(subscriber, || {
            info!("pretty output");
        });
    }
}
