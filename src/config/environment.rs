// ABOUTME: Environment configuration for provider credentials and planning limits
// ABOUTME: Parses and validates environment variables into a typed PlannerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_config, provider};
use crate::errors::{AppError, AppResult};
use coachforge_intelligence::evaluation::ScoringConfig;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// HTTP model provider settings
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// API key; `None` selects the offline model
    pub api_key: Option<String>,
    /// Provider base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Maximum output tokens per call
    pub max_tokens: u32,
    /// Per-call timeout
    pub timeout: Duration,
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: provider::DEFAULT_BASE_URL.to_owned(),
            model: provider::DEFAULT_MODEL.to_owned(),
            max_tokens: provider::DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(provider::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Complete planner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Model provider settings
    pub provider: ProviderSettings,
    /// Iteration ceiling per planning step
    pub max_iterations: u32,
    /// Coaching philosophy appended to the system instruction
    pub coach_philosophy: Option<String>,
    /// Evaluator calibration
    pub scoring: ScoringConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderSettings::default(),
            max_iterations: defaults::MAX_STEP_ITERATIONS,
            coach_philosophy: None,
            scoring: ScoringConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable does not parse or
    /// a value is outside its valid range
    pub fn from_env() -> AppResult<Self> {
        let api_key = non_empty_env(env_config::ANTHROPIC_API_KEY);
        let base_url = env_var_or(env_config::ANTHROPIC_BASE_URL, provider::DEFAULT_BASE_URL);
        let model = env_var_or(env_config::PLANNER_MODEL, provider::DEFAULT_MODEL);
        let max_tokens = parse_env(env_config::PLANNER_MAX_TOKENS, provider::DEFAULT_MAX_TOKENS)?;
        let timeout_secs = parse_env(
            env_config::PLANNER_MODEL_TIMEOUT_SECS,
            provider::DEFAULT_TIMEOUT_SECS,
        )?;
        let max_iterations = parse_env(
            env_config::PLANNER_MAX_ITERATIONS,
            defaults::MAX_STEP_ITERATIONS,
        )?;
        let pass_threshold = parse_env(
            env_config::EVAL_PASS_THRESHOLD,
            ScoringConfig::default().overall_pass_threshold,
        )?;

        let config = Self {
            provider: ProviderSettings {
                api_key,
                base_url: base_url.trim_end_matches('/').to_owned(),
                model,
                max_tokens,
                timeout: Duration::from_secs(timeout_secs),
            },
            max_iterations,
            coach_philosophy: non_empty_env(env_config::PLANNER_COACH_PHILOSOPHY),
            scoring: ScoringConfig::default().with_pass_threshold(pass_threshold),
        };
        config.validate()?;

        info!(
            model = %config.provider.model,
            online = config.provider.api_key.is_some(),
            max_iterations = config.max_iterations,
            "Planner configuration loaded"
        );
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid value
    pub fn validate(&self) -> AppResult<()> {
        if self.max_iterations == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_config::PLANNER_MAX_ITERATIONS
            )));
        }
        if self.provider.max_tokens == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_config::PLANNER_MAX_TOKENS
            )));
        }
        if self.provider.timeout.is_zero() {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_config::PLANNER_MODEL_TIMEOUT_SECS
            )));
        }
        let threshold = self.scoring.overall_pass_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(AppError::config(format!(
                "{} must be between 0 and 1, got {threshold}",
                env_config::EVAL_PASS_THRESHOLD
            )));
        }
        Ok(())
    }

    /// Whether a provider API key is configured
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.provider.api_key.is_some()
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|error| AppError::config(format!("Invalid {key}='{raw}': {error}"))),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_online());
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.provider.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = PlannerConfig {
            max_iterations: 0,
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let settings = ProviderSettings {
            api_key: Some("sk-secret".into()),
            ..ProviderSettings::default()
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
