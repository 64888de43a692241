// ABOUTME: Module containing the planning tool implementations organized by category.
// ABOUTME: Shared input-extraction helpers turn malformed payloads into ToolError values.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `screening` - movement screen analysis (`analyze_fms_scores`)
//! - `exercises` - catalog queries and compatibility checks
//! - `programming` - volume calculation and workout day synthesis
//! - `plans` - plan packaging (`save_workout_plan`)
//!
//! Tools validate their input against the published schema before calling
//! into `coachforge_intelligence`; all domain logic lives there.

/// Movement screen analysis tool
pub mod screening;

/// Exercise catalog and compatibility tools
pub mod exercises;

/// Volume and workout day tools
pub mod programming;

/// Plan packaging tool
pub mod plans;

pub use exercises::{CheckExerciseCompatibilityTool, QueryExerciseLibraryTool};
pub use plans::SaveWorkoutPlanTool;
pub use programming::{CalculateTrainingVolumeTool, GenerateWorkoutDayTool};
pub use screening::AnalyzeMovementScreenTool;

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::errors::ToolError;

// ============================================================================
// Input extraction helpers
// ============================================================================

/// Required field
fn required<'a>(tool: &str, input: &'a Value, key: &str) -> Result<&'a Value, ToolError> {
    match input.get(key) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool, key)),
        Some(value) => Ok(value),
    }
}

/// Required string field
fn required_str<'a>(tool: &str, input: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    required(tool, input, key)?
        .as_str()
        .ok_or_else(|| ToolError::invalid_input(tool, key, "expected a string"))
}

/// Optional string field
fn optional_str<'a>(tool: &str, input: &'a Value, key: &str) -> Result<Option<&'a str>, ToolError> {
    match input.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| ToolError::invalid_input(tool, key, "expected a string")),
    }
}

/// Optional non-negative integer field
fn optional_u64(tool: &str, input: &Value, key: &str) -> Result<Option<u64>, ToolError> {
    match input.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| ToolError::invalid_input(tool, key, "expected a non-negative integer")),
    }
}

/// Required non-negative integer field
fn required_u64(tool: &str, input: &Value, key: &str) -> Result<u64, ToolError> {
    optional_u64(tool, input, key)?.ok_or_else(|| ToolError::missing_parameter(tool, key))
}

/// Optional array of strings; absent means empty
fn string_list(tool: &str, input: &Value, key: &str) -> Result<Vec<String>, ToolError> {
    match input.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| ToolError::invalid_input(tool, key, "expected an array of strings"))
            })
            .collect(),
        Some(_) => Err(ToolError::invalid_input(tool, key, "expected an array of strings")),
    }
}

/// Required enum field parsed from its wire name
fn required_enum<T>(tool: &str, input: &Value, key: &str) -> Result<T, ToolError>
where
    T: FromStr<Err = String>,
{
    required_str(tool, input, key)?
        .parse()
        .map_err(|reason: String| ToolError::invalid_input(tool, key, reason))
}

/// Optional enum field parsed from its wire name
fn optional_enum<T>(tool: &str, input: &Value, key: &str) -> Result<Option<T>, ToolError>
where
    T: FromStr<Err = String>,
{
    optional_str(tool, input, key)?
        .map(str::parse)
        .transpose()
        .map_err(|reason: String| ToolError::invalid_input(tool, key, reason))
}

/// Optional field deserialized into a typed value; absent means default
fn typed_or_default<T>(tool: &str, input: &Value, key: &str) -> Result<T, ToolError>
where
    T: DeserializeOwned + Default,
{
    match input.get(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|error| ToolError::invalid_input(tool, key, error.to_string())),
    }
}

/// Serialize a tool result
fn to_output<T: serde::Serialize>(tool: &str, result: &T) -> Result<Value, ToolError> {
    serde_json::to_value(result)
        .map_err(|error| ToolError::invalid_input(tool, "output", error.to_string()))
}

/// Schema of an array of strings
fn string_array_schema(description: &str) -> Value {
    json!({
        "type": "array",
        "items": {"type": "string"},
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use coachforge_core::models::TrainingPhase;

    use super::*;

    #[test]
    fn test_required_rejects_null() {
        let input = json!({"day_focus": null});
        assert_eq!(
            required_str("generate_workout_day", &input, "day_focus"),
            Err(ToolError::missing_parameter("generate_workout_day", "day_focus"))
        );
    }

    #[test]
    fn test_enum_parsing_reports_allowed_values() {
        let input = json!({"training_phase": "peaking"});
        let error = required_enum::<TrainingPhase>("t", &input, "training_phase").unwrap_err();
        assert!(error.to_string().contains("anatomical_adaptation"));
    }

    #[test]
    fn test_string_list_rejects_mixed_arrays() {
        let input = json!({"injury_history": ["knee", 3]});
        assert!(string_list("t", &input, "injury_history").is_err());
        assert!(string_list("t", &json!({}), "injury_history").unwrap().is_empty());
    }
}
