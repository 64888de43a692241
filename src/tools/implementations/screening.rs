// ABOUTME: Movement screen tool scoring the seven FMS sub-scores into risk and limitations.
// ABOUTME: Validates every sub-score is an integer on the 0-3 scale before analysis.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachforge_core::constants::screen::MAX_SUB_SCORE;
use coachforge_core::constants::tools::ANALYZE_FMS_SCORES;
use coachforge_core::models::{MovementScreenScores, ScreenMovement};
use coachforge_intelligence::movement_screen::analyze_movement_screen;
use serde_json::{json, Map, Value};

use super::{required, string_array_schema, string_list, to_output};
use crate::errors::ToolError;
use crate::tools::context::ToolExecutionContext;
use crate::tools::traits::{PlanningTool, ToolCapabilities};

fn parse_scores(input: &Value) -> Result<MovementScreenScores, ToolError> {
    let fms = required(ANALYZE_FMS_SCORES, input, "fms_scores")?
        .as_object()
        .ok_or_else(|| ToolError::invalid_input(ANALYZE_FMS_SCORES, "fms_scores", "expected an object"))?;

    let mut scores = [0_u8; 7];
    for (slot, movement) in scores.iter_mut().zip(ScreenMovement::ALL) {
        let key = movement.as_str();
        let raw = fms
            .get(key)
            .filter(|value| !value.is_null())
            .ok_or_else(|| ToolError::missing_parameter(ANALYZE_FMS_SCORES, format!("fms_scores.{key}")))?;
        *slot = raw
            .as_u64()
            .and_then(|score| u8::try_from(score).ok())
            .filter(|score| *score <= MAX_SUB_SCORE)
            .ok_or_else(|| {
                ToolError::invalid_input(
                    ANALYZE_FMS_SCORES,
                    format!("fms_scores.{key}"),
                    format!("expected an integer between 0 and {MAX_SUB_SCORE}"),
                )
            })?;
    }
    Ok(MovementScreenScores::new(scores))
}

// ============================================================================
// AnalyzeMovementScreenTool - Score the functional movement screen
// ============================================================================

/// Scores the seven screen movements into a risk tier and limitation list
pub struct AnalyzeMovementScreenTool;

impl PlanningTool for AnalyzeMovementScreenTool {
    fn name(&self) -> &'static str {
        ANALYZE_FMS_SCORES
    }

    fn description(&self) -> &'static str {
        "Analyze Functional Movement Screen (FMS) scores to identify movement limitations, injury risk, and exercise contraindications. Use this tool when you need to understand a client's movement quality and determine what exercises are appropriate or should be avoided."
    }

    fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for movement in ScreenMovement::ALL {
            properties.insert(
                movement.as_str().to_owned(),
                json!({"type": "integer", "minimum": 0, "maximum": MAX_SUB_SCORE}),
            );
        }
        let required: Vec<&str> = ScreenMovement::ALL.iter().map(|movement| movement.as_str()).collect();

        json!({
            "type": "object",
            "properties": {
                "fms_scores": {
                    "type": "object",
                    "description": "FMS test scores (0-3 for each)",
                    "properties": properties,
                    "required": required
                },
                "injury_history": string_array_schema("List of past injuries and current limitations")
            },
            "required": ["fms_scores"]
        })
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::ANALYTICS | ToolCapabilities::SAFETY
    }

    fn execute(&self, input: &Value, _context: &ToolExecutionContext) -> Result<Value, ToolError> {
        let scores = parse_scores(input)?;
        let injury_history = string_list(ANALYZE_FMS_SCORES, input, "injury_history")?;
        let analysis = analyze_movement_screen(&scores, &injury_history);
        to_output(ANALYZE_FMS_SCORES, &analysis)
    }
}
