// ABOUTME: Main library entry point for Coachforge assessment-driven training plan generation
// ABOUTME: Tool-calling planning agent, language-model boundary, and plan evaluation harness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachforge
//!
//! Turns a structured client fitness assessment into a multi-week training
//! plan by running a language model through five planning steps. At each
//! step the model may call six deterministic domain tools (movement screen
//! analysis, exercise lookup, volume calculation, day synthesis,
//! compatibility check, plan packaging). When the model never saves a plan,
//! a template plan is synthesized so every run ends with a usable plan.
//!
//! ## Architecture
//!
//! - **`coachforge_core`**: data model, error types, shared constants
//! - **`coachforge_intelligence`**: the pure domain tool library, exercise
//!   catalog, fallback templates, and plan evaluator
//! - **Tools**: schemas, registry, and dispatch of the six domain tools
//! - **LLM**: provider trait, Anthropic messages client, offline model
//! - **Agent**: step and plan orchestrators
//! - **Evals**: reference scenarios and the evaluation harness
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coachforge::agent::PlanOrchestrator;
//! use coachforge::config::PlannerConfig;
//! use coachforge::errors::AppResult;
//! use coachforge::llm::provider_from_settings;
//! use coachforge_core::models::{Assessment, CoachPreferences};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = PlannerConfig::from_env()?;
//!     let model = provider_from_settings(&config.provider)?;
//!     let orchestrator = PlanOrchestrator::new(model, &config);
//!
//!     let outcome = orchestrator
//!         .generate_plan(&Assessment::default(), &CoachPreferences::default())
//!         .await;
//!     println!("{} ({} days)", outcome.plan.name, outcome.plan.workout_days.len());
//!     Ok(())
//! }
//! ```

/// Planning agent: step and plan orchestration
pub mod agent;

/// Environment configuration
pub mod config;

/// Runtime constants
pub mod constants;

/// Error types
pub mod errors;

/// Scenario evaluation harness
pub mod evals;

/// Language-model provider abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Domain tools exposed to the language model
pub mod tools;
