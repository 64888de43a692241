// ABOUTME: Defines the PlanningTool trait and ToolCapabilities for the planning tool layer.
// ABOUTME: Tools implement this trait to be registered and dispatched via the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning Tool Trait and Capabilities
//!
//! Every tool the model can invoke implements [`PlanningTool`], which
//! provides:
//! - Tool metadata (wire name, description, input schema)
//! - Capability flags for filtering and context folding
//! - Synchronous execution against a [`ToolExecutionContext`]
//!
//! Execution is synchronous: tools are pure, fast, and never suspend.

use bitflags::bitflags;
use serde_json::Value;

use crate::errors::ToolError;

use super::context::ToolExecutionContext;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool reads the exercise catalog
        const READS_CATALOG = 0b0000_0001;
        /// Tool performs calculations over client data
        const ANALYTICS = 0b0000_0010;
        /// Tool checks exercises or screens for safety
        const SAFETY = 0b0000_0100;
        /// Tool produces plan content
        const PRODUCES_PLAN = 0b0000_1000;
    }
}

impl ToolCapabilities {
    /// Check if tool reads the catalog
    #[must_use]
    pub const fn reads_catalog(self) -> bool {
        self.contains(Self::READS_CATALOG)
    }

    /// Check if tool produces plan content
    #[must_use]
    pub const fn produces_plan(self) -> bool {
        self.contains(Self::PRODUCES_PLAN)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            (Self::READS_CATALOG, "reads_catalog"),
            (Self::ANALYTICS, "analytics"),
            (Self::SAFETY, "safety"),
            (Self::PRODUCES_PLAN, "produces_plan"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, label)| *label)
        .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait every planning tool implements.
///
/// # Example
///
/// ```rust,no_run
/// use coachforge::errors::ToolError;
/// use coachforge::tools::{PlanningTool, ToolCapabilities, ToolExecutionContext};
/// use serde_json::{json, Value};
///
/// struct EchoTool;
///
/// impl PlanningTool for EchoTool {
///     fn name(&self) -> &'static str {
///         "echo"
///     }
///
///     fn description(&self) -> &'static str {
///         "Return the input unchanged"
///     }
///
///     fn input_schema(&self) -> Value {
///         json!({"type": "object", "properties": {}})
///     }
///
///     fn capabilities(&self) -> ToolCapabilities {
///         ToolCapabilities::empty()
///     }
///
///     fn execute(&self, input: &Value, _context: &ToolExecutionContext) -> Result<Value, ToolError> {
///         Ok(input.clone())
///     }
/// }
/// ```
pub trait PlanningTool: Send + Sync {
    /// Wire name the model uses to invoke the tool
    fn name(&self) -> &'static str;

    /// Description for model consumption
    fn description(&self) -> &'static str;

    /// JSON schema of the tool input; a fixed contract with the model
    fn input_schema(&self) -> Value;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool
    ///
    /// # Errors
    ///
    /// Returns `ToolError` when the input misses a required field or carries
    /// an invalid value
    fn execute(&self, input: &Value, context: &ToolExecutionContext) -> Result<Value, ToolError>;
}
