// ABOUTME: Central registry for planning tools with ordered definitions and infallible dispatch.
// ABOUTME: Converts tool input errors and unknown tool names into structured error results.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for planning tools, providing:
//! - Tool registration and lookup
//! - The ordered tool catalog sent to the model
//! - Dispatch that never fails: errors become `{"error", "code"}` results
//!   so the step loop always continues

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ToolError;
use crate::llm::ToolDefinition;

use super::context::ToolExecutionContext;
use super::implementations::{
    AnalyzeMovementScreenTool, CalculateTrainingVolumeTool, CheckExerciseCompatibilityTool,
    GenerateWorkoutDayTool, QueryExerciseLibraryTool, SaveWorkoutPlanTool,
};
use super::traits::{PlanningTool, ToolCapabilities};

/// Result of dispatching one tool invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    /// Tool output, or an error object when `is_error` is set
    pub value: Value,
    /// Whether the value is an error object
    pub is_error: bool,
}

impl ToolOutcome {
    /// Successful outcome
    #[must_use]
    pub const fn success(value: Value) -> Self {
        Self {
            value,
            is_error: false,
        }
    }

    /// Error outcome carrying the error's JSON object
    #[must_use]
    pub fn failure(error: &ToolError) -> Self {
        Self {
            value: error.to_json(),
            is_error: true,
        }
    }

    /// Serialized content for the transcript
    #[must_use]
    pub fn content(&self) -> String {
        self.value.to_string()
    }
}

/// Central registry for planning tools
///
/// Built once and then used immutably; tools are `Arc`-wrapped so a
/// registry can be shared across concurrent runs.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<&'static str, Arc<dyn PlanningTool>>,
    /// Registration order
    order: Vec<&'static str>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the six planning tools in their fixed order
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AnalyzeMovementScreenTool));
        registry.register(Arc::new(QueryExerciseLibraryTool));
        registry.register(Arc::new(CalculateTrainingVolumeTool));
        registry.register(Arc::new(GenerateWorkoutDayTool));
        registry.register(Arc::new(CheckExerciseCompatibilityTool));
        registry.register(Arc::new(SaveWorkoutPlanTool));
        registry
    }

    /// Register a tool
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn PlanningTool>) -> bool {
        let name = tool.name();
        if self.tools.contains_key(name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!(
            "Registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.tools.insert(name, tool);
        self.order.push(name);
        true
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn PlanningTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tool names in registration order
    #[must_use]
    pub fn tool_names(&self) -> &[&'static str] {
        &self.order
    }

    /// Names of tools carrying all the given capabilities
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&'static str> {
        self.order
            .iter()
            .copied()
            .filter(|name| {
                self.tools
                    .get(name)
                    .is_some_and(|tool| tool.capabilities().contains(required))
            })
            .collect()
    }

    /// Tool catalog sent to the model, in registration order
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| ToolDefinition {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Execute a tool by name
    ///
    /// Never fails: unknown names and invalid inputs produce an error
    /// outcome the model can read.
    #[must_use]
    pub fn execute(&self, name: &str, input: &Value, context: &ToolExecutionContext) -> ToolOutcome {
        let result = self
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))
            .and_then(|tool| tool.execute(input, context));

        match result {
            Ok(value) => {
                debug!(tool = name, "Tool executed");
                ToolOutcome::success(value)
            }
            Err(error) => {
                warn!(tool = name, code = error.code().as_str(), "Tool returned error: {error}");
                ToolOutcome::failure(&error)
            }
        }
    }
}
