// ABOUTME: Planning tool layer exposing the six deterministic domain tools to the model.
// ABOUTME: Provides the tool trait, registry, execution context, and implementations.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning Tools
//!
//! The model plans by invoking tools. Each tool wraps one pure function
//! from `coachforge_intelligence` behind a fixed JSON schema:
//!
//! - `traits` - the [`PlanningTool`] trait and [`ToolCapabilities`] flags
//! - `registry` - ordered registration and infallible dispatch
//! - `context` - the per-run exercise catalog handed to every tool
//! - `implementations` - the six tools grouped by category

/// Tool execution context
pub mod context;

/// Tool implementations by category
pub mod implementations;

/// Tool registry and dispatch
pub mod registry;

/// Tool trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::{ToolOutcome, ToolRegistry};
pub use traits::{PlanningTool, ToolCapabilities};
