// ABOUTME: Tool-specific error types for the planning tool layer
// ABOUTME: Converted into structured JSON error objects instead of aborting the tool loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Error Types
//!
//! Errors raised while dispatching a tool invocation emitted by the model.
//! None of them are fatal: the registry serializes them into the tool result
//! so the model can read the failure and try again.

use std::error::Error;
use std::fmt;

use serde_json::{json, Value};

use super::ErrorCode;

/// Errors specific to tool dispatch and input validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Tool name is outside the registered catalog
    UnknownTool {
        /// Name the model asked for
        tool_name: String,
    },
    /// A required field is absent from the tool input
    MissingParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the missing field
        parameter: String,
    },
    /// A field is present but has the wrong type or an unsupported value
    InvalidInput {
        /// Name of the tool
        tool_name: String,
        /// Name of the offending field
        parameter: String,
        /// Reason the value was rejected
        reason: String,
    },
}

impl ToolError {
    /// Create an "unknown tool" error
    #[must_use]
    pub fn unknown_tool(tool_name: impl Into<String>) -> Self {
        Self::UnknownTool {
            tool_name: tool_name.into(),
        }
    }

    /// Create a "missing parameter" error
    #[must_use]
    pub fn missing_parameter(tool_name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(
        tool_name: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Get the tool name associated with this error
    #[must_use]
    pub fn tool_name(&self) -> &str {
        match self {
            Self::UnknownTool { tool_name }
            | Self::MissingParameter { tool_name, .. }
            | Self::InvalidInput { tool_name, .. } => tool_name,
        }
    }

    /// Map to the shared error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownTool { .. } => ErrorCode::ResourceNotFound,
            Self::MissingParameter { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
        }
    }

    /// Structured error object returned to the model as the tool result
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "error": self.to_string(),
            "code": self.code().as_str(),
        })
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool { tool_name } => write!(f, "Unknown tool: {tool_name}"),
            Self::MissingParameter {
                tool_name,
                parameter,
            } => write!(
                f,
                "Tool '{tool_name}' is missing required parameter '{parameter}'"
            ),
            Self::InvalidInput {
                tool_name,
                parameter,
                reason,
            } => write!(
                f,
                "Tool '{tool_name}' received invalid '{parameter}': {reason}"
            ),
        }
    }
}

impl Error for ToolError {}
