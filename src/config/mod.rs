// ABOUTME: Configuration module for the planning runtime
// ABOUTME: Environment-driven settings for the model provider, step loop, and evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Coachforge
//!
//! - **Environment**: provider credentials, model limits, step iteration
//!   ceiling, and evaluation threshold read from environment variables

/// Environment configuration
pub mod environment;

pub use environment::{PlannerConfig, ProviderSettings};
