// ABOUTME: Programming tools computing volume targets and synthesizing single training days.
// ABOUTME: Phase and goal enums are validated against their wire vocabularies.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroU8;

use coachforge_core::constants::calendar::WEEKDAYS;
use coachforge_core::constants::defaults::SESSION_MINUTES;
use coachforge_core::constants::tools::{CALCULATE_TRAINING_VOLUME, GENERATE_WORKOUT_DAY};
use coachforge_core::models::{ExperienceLevel, PrimaryGoal, TrainingPhase};
use coachforge_intelligence::volume::{calculate_volume, VolumeRequest};
use coachforge_intelligence::workout_day::{synthesize_workout_day, DayRequest, SeedExercise};
use serde_json::{json, Value};

use super::{
    optional_str, optional_u64, required, required_enum, required_str, required_u64,
    string_array_schema, string_list, to_output, typed_or_default,
};
use crate::errors::ToolError;
use crate::tools::context::ToolExecutionContext;
use crate::tools::traits::{PlanningTool, ToolCapabilities};

/// Phases offered for day synthesis; deload is accepted but not advertised
const DAY_PHASES: [TrainingPhase; 4] = [
    TrainingPhase::AnatomicalAdaptation,
    TrainingPhase::Hypertrophy,
    TrainingPhase::Strength,
    TrainingPhase::Power,
];

fn training_days(input: &Value) -> Result<NonZeroU8, ToolError> {
    let raw = required_u64(CALCULATE_TRAINING_VOLUME, input, "days_per_week")?;
    u8::try_from(raw)
        .ok()
        .filter(|days| usize::from(*days) <= WEEKDAYS.len())
        .and_then(NonZeroU8::new)
        .ok_or_else(|| {
            ToolError::invalid_input(
                CALCULATE_TRAINING_VOLUME,
                "days_per_week",
                format!("expected between 1 and {} days, got {raw}", WEEKDAYS.len()),
            )
        })
}

// ============================================================================
// CalculateTrainingVolumeTool - Weekly volume and intensity targets
// ============================================================================

/// Computes weekly sets, rep range, RPE band, and rest guidance
pub struct CalculateTrainingVolumeTool;

impl PlanningTool for CalculateTrainingVolumeTool {
    fn name(&self) -> &'static str {
        CALCULATE_TRAINING_VOLUME
    }

    fn description(&self) -> &'static str {
        "Calculate appropriate training volume (sets, reps, intensity) based on client experience level, goals, and current training phase. Use this to ensure volume prescriptions are appropriate."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "experience_level": {
                    "type": "string",
                    "enum": ExperienceLevel::wire_values(),
                    "description": "Client's training experience level"
                },
                "training_phase": {
                    "type": "string",
                    "enum": TrainingPhase::wire_values(),
                    "description": "Current periodization phase"
                },
                "primary_goal": {
                    "type": "string",
                    "enum": PrimaryGoal::wire_values(),
                    "description": "Primary training goal"
                },
                "days_per_week": {
                    "type": "integer",
                    "minimum": 2,
                    "maximum": 6,
                    "description": "Training days per week"
                },
                "muscle_group": {
                    "type": "string",
                    "description": "Target muscle group for volume calculation"
                }
            },
            "required": ["experience_level", "training_phase", "primary_goal", "days_per_week"]
        })
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::ANALYTICS
    }

    fn execute(&self, input: &Value, _context: &ToolExecutionContext) -> Result<Value, ToolError> {
        let tool = CALCULATE_TRAINING_VOLUME;
        optional_str(tool, input, "muscle_group")?;

        let request = VolumeRequest {
            experience: required_enum(tool, input, "experience_level")?,
            phase: required_enum(tool, input, "training_phase")?,
            goal: required_enum(tool, input, "primary_goal")?,
            days_per_week: training_days(input)?,
        };

        to_output(tool, &calculate_volume(&request))
    }
}

// ============================================================================
// GenerateWorkoutDayTool - Single session skeleton
// ============================================================================

/// Builds a warm-up, main work, and cool-down skeleton for one day
pub struct GenerateWorkoutDayTool;

impl PlanningTool for GenerateWorkoutDayTool {
    fn name(&self) -> &'static str {
        GENERATE_WORKOUT_DAY
    }

    fn description(&self) -> &'static str {
        "Generate a complete workout for a specific training day with exercises, sets, reps, rest periods, and coaching cues. Use this to create individual training sessions."
    }

    fn input_schema(&self) -> Value {
        let phases: Vec<&str> = DAY_PHASES.iter().map(|phase| phase.as_str()).collect();
        json!({
            "type": "object",
            "properties": {
                "day_focus": {
                    "type": "string",
                    "description": "Primary focus of the training day (e.g., 'Upper Body Push', 'Lower Body')"
                },
                "movement_patterns": string_array_schema("Movement patterns to include in this session"),
                "training_phase": {
                    "type": "string",
                    "enum": phases,
                    "description": "Current training phase for volume/intensity prescription"
                },
                "session_duration_minutes": {
                    "type": "integer",
                    "description": "Target session duration in minutes"
                },
                "exercises": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": {"type": "string"},
                            "category": {"type": "string"}
                        }
                    },
                    "description": "Specific exercises to include (from exercise library query)"
                }
            },
            "required": ["day_focus", "movement_patterns", "training_phase"]
        })
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::PRODUCES_PLAN
    }

    fn execute(&self, input: &Value, _context: &ToolExecutionContext) -> Result<Value, ToolError> {
        let tool = GENERATE_WORKOUT_DAY;
        required(tool, input, "movement_patterns")?;

        let session_duration_minutes = match optional_u64(tool, input, "session_duration_minutes")? {
            None => SESSION_MINUTES,
            Some(minutes) => u16::try_from(minutes).map_err(|_| {
                ToolError::invalid_input(tool, "session_duration_minutes", "duration is too large")
            })?,
        };

        let request = DayRequest {
            day_focus: required_str(tool, input, "day_focus")?.to_owned(),
            movement_patterns: string_list(tool, input, "movement_patterns")?,
            phase: required_enum(tool, input, "training_phase")?,
            session_duration_minutes,
            exercises: typed_or_default::<Vec<SeedExercise>>(tool, input, "exercises")?,
        };

        to_output(tool, &synthesize_workout_day(&request))
    }
}
