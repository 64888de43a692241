// ABOUTME: Plan packaging tool that normalizes the model's finished plan for saving.
// ABOUTME: Workout days are parsed leniently so loosely typed model output still packages.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachforge_core::constants::tools::SAVE_WORKOUT_PLAN;
use coachforge_core::models::{Plan, WorkoutDay};
use coachforge_intelligence::packaging::package_plan;
use serde_json::{json, Value};

use super::{optional_str, required, required_str, to_output};
use crate::errors::ToolError;
use crate::tools::context::ToolExecutionContext;
use crate::tools::traits::{PlanningTool, ToolCapabilities};

/// Parse weeks and workout days with the plan model's lenient field coercion
fn plan_body(input: &Value) -> Result<(u8, Vec<WorkoutDay>), ToolError> {
    let weeks = required(SAVE_WORKOUT_PLAN, input, "weeks")?;
    let days = required(SAVE_WORKOUT_PLAN, input, "workout_days")?;
    if !days.is_array() {
        return Err(ToolError::invalid_input(
            SAVE_WORKOUT_PLAN,
            "workout_days",
            "expected an array of workout days",
        ));
    }

    serde_json::from_value::<Plan>(json!({ "weeks": weeks, "workout_days": days }))
        .map(|plan| (plan.weeks, plan.workout_days))
        .map_err(|error| ToolError::invalid_input(SAVE_WORKOUT_PLAN, "workout_days", error.to_string()))
}

// ============================================================================
// SaveWorkoutPlanTool - Package the finished plan
// ============================================================================

/// Normalizes and echoes the finished plan, marking it ready to save
pub struct SaveWorkoutPlanTool;

impl PlanningTool for SaveWorkoutPlanTool {
    fn name(&self) -> &'static str {
        SAVE_WORKOUT_PLAN
    }

    fn description(&self) -> &'static str {
        "Save the completed workout plan in the structured format required by the system. Use this when you have finalized the complete 4-week plan and are ready to save it."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "plan_name": {
                    "type": "string",
                    "description": "Name for the workout plan"
                },
                "weeks": {
                    "type": "integer",
                    "description": "Number of weeks in the plan"
                },
                "workout_days": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "week_number": {"type": "integer"},
                            "day_of_week": {"type": "integer"},
                            "name": {"type": "string"},
                            "focus": {"type": "string"},
                            "exercises": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "exercise_name": {"type": "string"},
                                        "sets": {"type": "integer"},
                                        "reps": {"type": "string"},
                                        "rest_seconds": {"type": "integer"},
                                        "rpe": {"type": "integer"},
                                        "notes": {"type": "string"}
                                    }
                                }
                            },
                            "notes": {"type": "string"}
                        }
                    },
                    "description": "Array of workout days with exercises"
                },
                "coach_notes": {
                    "type": "string",
                    "description": "Overall notes and instructions for the plan"
                }
            },
            "required": ["plan_name", "weeks", "workout_days"]
        })
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::PRODUCES_PLAN
    }

    fn execute(&self, input: &Value, _context: &ToolExecutionContext) -> Result<Value, ToolError> {
        let tool = SAVE_WORKOUT_PLAN;
        let name = required_str(tool, input, "plan_name")?.to_owned();
        let (weeks, days) = plan_body(input)?;
        let notes = optional_str(tool, input, "coach_notes")?.map(str::to_owned);

        to_output(tool, &package_plan(Some(name), Some(weeks), days, notes))
    }
}
