// ABOUTME: Runtime constants for the planning service and its model provider
// ABOUTME: Service names, environment variable keys, and provider defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Runtime constants. Domain constants live in `coachforge_core::constants`.

pub use coachforge_core::constants::{calendar, defaults, screen, steps, tools};

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name reported by logging
    pub const COACHFORGE: &str = "coachforge";
}

/// Environment variable names read by configuration
pub mod env_config {
    /// API key of the HTTP model provider
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
    /// Base URL of the HTTP model provider
    pub const ANTHROPIC_BASE_URL: &str = "ANTHROPIC_BASE_URL";
    /// Model identifier
    pub const PLANNER_MODEL: &str = "PLANNER_MODEL";
    /// Maximum output tokens per model call
    pub const PLANNER_MAX_TOKENS: &str = "PLANNER_MAX_TOKENS";
    /// Per-call model timeout in seconds
    pub const PLANNER_MODEL_TIMEOUT_SECS: &str = "PLANNER_MODEL_TIMEOUT_SECS";
    /// Iteration ceiling per planning step
    pub const PLANNER_MAX_ITERATIONS: &str = "PLANNER_MAX_ITERATIONS";
    /// Free-text coaching philosophy appended to the system instruction
    pub const PLANNER_COACH_PHILOSOPHY: &str = "PLANNER_COACH_PHILOSOPHY";
    /// Overall evaluation pass threshold
    pub const EVAL_PASS_THRESHOLD: &str = "EVAL_PASS_THRESHOLD";
}

/// Model provider defaults
pub mod provider {
    /// Default provider base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
    /// Messages endpoint path
    pub const MESSAGES_PATH: &str = "/v1/messages";
    /// Value of the `anthropic-version` header
    pub const API_VERSION: &str = "2023-06-01";
    /// Default model identifier
    pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
    /// Default maximum output tokens per call
    pub const DEFAULT_MAX_TOKENS: u32 = 4096;
    /// Default per-call timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
    /// Provider name reported by the offline model
    pub const OFFLINE: &str = "offline";
}
