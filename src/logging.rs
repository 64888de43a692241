// ABOUTME: Structured logging setup for planning runs and the evaluation binary
// ABOUTME: Reads log level and format from the environment and installs a stderr tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs go to stderr so the evaluation binary can print its report on stdout.
//! Planning steps run inside `plan_step` spans; set `LOG_INCLUDE_SPANS` to
//! see when each step opens and closes.

use crate::constants::service_names;
use anyhow::Result;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Crates whose debug output drowns planning logs
const NOISY_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives, `RUST_LOG` syntax
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name recorded at startup
    pub service_name: String,
    /// Deployment environment recorded at startup
    pub environment: String,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human readable output
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::COACHFORGE.to_owned(),
            environment: "development".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_THREAD`, `LOG_INCLUDE_SPANS`, `SERVICE_NAME` and
    /// `ENVIRONMENT`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment == "production";
        let flag = |key: &str| env::var_os(key).is_some();

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT").map_or(defaults.format, |value| LogFormat::parse(&value)),
            include_location: production || flag("LOG_INCLUDE_LOCATION"),
            include_thread: production || flag("LOG_INCLUDE_THREAD"),
            include_spans: flag("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            environment,
        }
    }

    /// Warnings only, compact; the evaluation binary's default
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Compact,
            ..Self::from_env()
        }
    }

    fn env_filter(&self) -> EnvFilter {
        NOISY_TARGETS
            .iter()
            .fold(EnvFilter::new(&self.level), |filter, target| {
                let directive: Directive = format!("{target}=warn")
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into());
                filter.add_directive(directive)
            })
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let compact = self.format == LogFormat::Compact;

        let base = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location && !compact)
            .with_line_number(self.include_location && !compact)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_target(!compact)
            .with_span_events(span_events);

        let output = match self.format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Pretty => base.boxed(),
            LogFormat::Compact => base.compact().boxed(),
        };

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(output)
            .try_init()?;

        info!(
            service = %self.service_name,
            version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            level = %self.level,
            format = self.format.as_str(),
            "Logging initialized"
        );
        Ok(())
    }
}

/// Install logging configured from the environment
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" Compact "), LogFormat::Compact);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, "coachforge");
    }

    #[test]
    fn test_noisy_targets_are_capped() {
        let filter = LoggingConfig::default().env_filter().to_string();
        for target in NOISY_TARGETS {
            assert!(filter.contains(&format!("{target}=warn")), "{filter}");
        }
    }
}
