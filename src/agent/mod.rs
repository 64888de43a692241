// ABOUTME: Planning agent that turns a client assessment into a training plan
// ABOUTME: Five-step tool-calling conversation with a deterministic fallback plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning Agent
//!
//! The [`PlanOrchestrator`] runs the five planning steps in order. Each step
//! is driven by the [`StepOrchestrator`], which alternates model calls with
//! tool executions and folds tool results into the shared
//! [`PlanningContext`].

/// Per-run planning state
pub mod context;
/// Five-step plan orchestration
pub mod pipeline;
/// Embedded system and step instructions
pub mod prompts;
/// Bounded tool-calling loop for one step
pub mod step;

pub use context::{PlanningContext, StepMetadata};
pub use pipeline::{planning_steps, PlanOrchestrator, PlanOutcome};
pub use step::{build_step_prompt, StepDefinition, StepLimits, StepOrchestrator};
