// ABOUTME: Exercise tools for catalog lookup and per-exercise compatibility checks.
// ABOUTME: Queries read the run's injected catalog; compatibility uses fixed rule tables.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachforge_core::constants::tools::{CHECK_EXERCISE_COMPATIBILITY, QUERY_EXERCISE_LIBRARY};
use coachforge_core::models::{Difficulty, MovementPattern};
use coachforge_intelligence::catalog::{query_exercise_catalog, ExerciseQuery};
use coachforge_intelligence::compatibility::{check_compatibility, CompatibilityRequest};
use serde_json::{json, Value};

use super::{optional_enum, required_enum, required_str, string_array_schema, string_list, to_output};
use crate::errors::ToolError;
use crate::tools::context::ToolExecutionContext;
use crate::tools::traits::{PlanningTool, ToolCapabilities};

// ============================================================================
// QueryExerciseLibraryTool - Search the exercise catalog
// ============================================================================

/// Looks up catalog entries by movement pattern, difficulty, and equipment
pub struct QueryExerciseLibraryTool;

impl PlanningTool for QueryExerciseLibraryTool {
    fn name(&self) -> &'static str {
        QUERY_EXERCISE_LIBRARY
    }

    fn description(&self) -> &'static str {
        "Search the exercise database to find suitable exercises based on movement pattern, target muscle, equipment, and skill level. Use this when you need to find specific exercises that match client capabilities and goals."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "movement_pattern": {
                    "type": "string",
                    "enum": MovementPattern::wire_values(),
                    "description": "Primary movement pattern to search for"
                },
                "target_muscles": string_array_schema("Target muscle groups (e.g., quadriceps, glutes, chest)"),
                "difficulty": {
                    "type": "string",
                    "enum": Difficulty::wire_values(),
                    "description": "Exercise difficulty level"
                },
                "equipment_available": string_array_schema("Available equipment (e.g., barbell, dumbbells, bodyweight)"),
                "exclude_patterns": string_array_schema("Movement patterns or exercises to exclude based on limitations")
            },
            "required": ["movement_pattern"]
        })
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_CATALOG
    }

    fn execute(&self, input: &Value, context: &ToolExecutionContext) -> Result<Value, ToolError> {
        let tool = QUERY_EXERCISE_LIBRARY;
        // Accepted for the model's benefit; catalog entries carry no muscle tags
        string_list(tool, input, "target_muscles")?;

        let query = ExerciseQuery {
            movement_pattern: required_enum(tool, input, "movement_pattern")?,
            difficulty: optional_enum(tool, input, "difficulty")?.unwrap_or_default(),
            equipment_available: string_list(tool, input, "equipment_available")?,
            exclude_patterns: string_list(tool, input, "exclude_patterns")?,
        };

        to_output(tool, &query_exercise_catalog(context.catalog(), &query))
    }
}

// ============================================================================
// CheckExerciseCompatibilityTool - Screen one exercise against limitations
// ============================================================================

/// Checks an exercise against screen limitations and injury history
pub struct CheckExerciseCompatibilityTool;

impl PlanningTool for CheckExerciseCompatibilityTool {
    fn name(&self) -> &'static str {
        CHECK_EXERCISE_COMPATIBILITY
    }

    fn description(&self) -> &'static str {
        "Check if a specific exercise is compatible with client's FMS findings and limitations. Use this before including an exercise in a plan to ensure safety."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "exercise_name": {
                    "type": "string",
                    "description": "Name of the exercise to check"
                },
                "movement_pattern": {
                    "type": "string",
                    "description": "Primary movement pattern of the exercise"
                },
                "fms_limitations": string_array_schema("List of FMS-identified limitations"),
                "injury_history": string_array_schema("Relevant injury history")
            },
            "required": ["exercise_name", "movement_pattern"]
        })
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::SAFETY
    }

    fn execute(&self, input: &Value, _context: &ToolExecutionContext) -> Result<Value, ToolError> {
        let tool = CHECK_EXERCISE_COMPATIBILITY;
        let request = CompatibilityRequest {
            exercise_name: required_str(tool, input, "exercise_name")?.to_owned(),
            movement_pattern: required_str(tool, input, "movement_pattern")?.to_owned(),
            limitations: string_list(tool, input, "fms_limitations")?,
            injury_history: string_list(tool, input, "injury_history")?,
        };

        to_output(tool, &check_compatibility(&request))
    }
}
