// ABOUTME: Error types for the planning runtime
// ABOUTME: Re-exports core errors and defines language-model provider failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Domain and configuration errors live in `coachforge_core::errors`. This
//! module adds [`ProviderError`], raised at the language-model boundary.
//! Provider errors never escape a planning step: the step orchestrator
//! logs them and treats the turn as an empty response.

use thiserror::Error;

pub use coachforge_core::errors::{AppError, AppResult, ErrorCode, ToolError};

/// Failure of a single language-model call
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure
    #[error("HTTP request to model provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Model provider returned status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body or status text
        message: String,
    },

    /// Call did not resolve within the configured timeout
    #[error("Model call timed out after {seconds}s")]
    Timeout {
        /// Timeout that elapsed
        seconds: u64,
    },

    /// Response body could not be interpreted
    #[error("Unparseable model response: {0}")]
    Parse(String),

    /// No credentials for the provider
    #[error("Model provider not configured: {0}")]
    NotConfigured(&'static str),
}

impl ProviderError {
    /// Whether a later call could plausibly succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout { .. } => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Parse(_) | Self::NotConfigured(_) => false,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = if error.is_transient() {
            ErrorCode::ExternalServiceUnavailable
        } else {
            ErrorCode::ExternalServiceError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ProviderError::Timeout { seconds: 5 }.is_transient());
        assert!(ProviderError::Api {
            status: 503,
            message: "overloaded".into()
        }
        .is_transient());
        assert!(!ProviderError::Api {
            status: 400,
            message: "bad request".into()
        }
        .is_transient());
        assert!(!ProviderError::NotConfigured("ANTHROPIC_API_KEY").is_transient());
    }

    #[test]
    fn test_conversion_to_app_error() {
        let error: AppError = ProviderError::Timeout { seconds: 120 }.into();
        assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
        assert!(error.message.contains("120s"));
    }
}
