// ABOUTME: Mutable state of one planning run shared across its five steps
// ABOUTME: Folds tool results into screen analysis, candidates, weekly structure, and the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning Context
//!
//! A [`PlanningContext`] is created at the start of a run, owned exclusively
//! by it, and dropped when the run ends. Tool results flow into it through
//! [`PlanningContext::fold`]:
//!
//! | Tool | Effect |
//! |------|--------|
//! | `analyze_fms_scores` | replaces the screen analysis |
//! | `query_exercise_library` | appends to the exercise candidates |
//! | `calculate_training_volume` | replaces the weekly structure |
//! | `save_workout_plan` | replaces the plan |

use std::collections::BTreeMap;
use std::mem;
use std::sync::Arc;

use coachforge_core::constants::tools;
use coachforge_core::models::{Assessment, CatalogEntry, CoachPreferences, Plan};
use coachforge_intelligence::catalog::ExerciseCatalog;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::llm::{Transcript, Turn};
use crate::tools::ToolExecutionContext;

/// What a completed step left behind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMetadata {
    /// Model calls made during the step
    pub iterations: u32,
    /// Text of the step's last model response
    pub final_response: String,
}

/// State of one planning run
#[derive(Debug, Clone)]
pub struct PlanningContext {
    assessment: Assessment,
    preferences: CoachPreferences,
    tools: ToolExecutionContext,
    screen_analysis: Option<Value>,
    exercise_candidates: Vec<CatalogEntry>,
    weekly_structure: Option<Value>,
    plan: Option<Plan>,
    transcript: Transcript,
    step_metadata: BTreeMap<String, StepMetadata>,
}

impl PlanningContext {
    /// Fresh context for a run over the given catalog
    #[must_use]
    pub fn new(
        assessment: Assessment,
        preferences: CoachPreferences,
        catalog: Arc<ExerciseCatalog>,
    ) -> Self {
        Self {
            assessment,
            preferences,
            tools: ToolExecutionContext::new(catalog),
            screen_analysis: None,
            exercise_candidates: Vec::new(),
            weekly_structure: None,
            plan: None,
            transcript: Transcript::new(),
            step_metadata: BTreeMap::new(),
        }
    }

    /// Client assessment
    #[must_use]
    pub const fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    /// Coach preferences
    #[must_use]
    pub const fn preferences(&self) -> &CoachPreferences {
        &self.preferences
    }

    /// Resources handed to tool executions
    #[must_use]
    pub const fn tool_context(&self) -> &ToolExecutionContext {
        &self.tools
    }

    /// Latest screen analysis
    #[must_use]
    pub const fn screen_analysis(&self) -> Option<&Value> {
        self.screen_analysis.as_ref()
    }

    /// Catalog entries returned by every exercise query, in order
    #[must_use]
    pub fn exercise_candidates(&self) -> &[CatalogEntry] {
        &self.exercise_candidates
    }

    /// Latest weekly volume result
    #[must_use]
    pub const fn weekly_structure(&self) -> Option<&Value> {
        self.weekly_structure.as_ref()
    }

    /// Plan packaged by the model, if any
    #[must_use]
    pub const fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Conversation so far
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Metadata of completed steps, keyed by step name
    #[must_use]
    pub const fn step_metadata(&self) -> &BTreeMap<String, StepMetadata> {
        &self.step_metadata
    }

    /// Append a turn to the transcript
    pub fn push_turn(&mut self, turn: Turn) {
        self.transcript = mem::take(&mut self.transcript).appended(turn);
    }

    /// Record the outcome of a step
    pub fn record_step(&mut self, step: &str, metadata: StepMetadata) {
        self.step_metadata.insert(step.to_owned(), metadata);
    }

    /// Fold a successful tool result into the context
    pub fn fold(&mut self, tool: &str, result: &Value) {
        match tool {
            tools::ANALYZE_FMS_SCORES => {
                self.screen_analysis = Some(result.clone());
            }
            tools::QUERY_EXERCISE_LIBRARY => {
                let Some(exercises) = result.get("exercises") else {
                    return;
                };
                match serde_json::from_value::<Vec<CatalogEntry>>(exercises.clone()) {
                    Ok(entries) => {
                        debug!(count = entries.len(), "Adding exercise candidates");
                        self.exercise_candidates.extend(entries);
                    }
                    Err(e) => warn!("Ignoring malformed exercise query result: {e}"),
                }
            }
            tools::CALCULATE_TRAINING_VOLUME => {
                self.weekly_structure = Some(result.clone());
            }
            tools::SAVE_WORKOUT_PLAN => {
                let Some(plan) = result.get("plan") else {
                    return;
                };
                match serde_json::from_value::<Plan>(plan.clone()) {
                    Ok(plan) => {
                        debug!(
                            name = %plan.name,
                            days = plan.workout_days.len(),
                            "Plan saved to context"
                        );
                        self.plan = Some(plan);
                    }
                    Err(e) => warn!("Ignoring malformed saved plan: {e}"),
                }
            }
            _ => {}
        }
    }

    /// Consume the context, returning its plan and step metadata
    #[must_use]
    pub fn into_parts(self) -> (Option<Plan>, BTreeMap<String, StepMetadata>) {
        (self.plan, self.step_metadata)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn context() -> PlanningContext {
        PlanningContext::new(
            Assessment::default(),
            CoachPreferences::default(),
            Arc::new(ExerciseCatalog::builtin()),
        )
    }

    #[test]
    fn test_queries_append_candidates() {
        let mut context = context();
        let result = json!({"exercises": [{"name": "Goblet Squat", "equipment": ["dumbbell"], "cues": []}]});
        context.fold(tools::QUERY_EXERCISE_LIBRARY, &result);
        context.fold(tools::QUERY_EXERCISE_LIBRARY, &result);
        assert_eq!(context.exercise_candidates().len(), 2);
    }

    #[test]
    fn test_analysis_and_plan_are_replaced() {
        let mut context = context();
        context.fold(tools::ANALYZE_FMS_SCORES, &json!({"total_score": 12}));
        context.fold(tools::ANALYZE_FMS_SCORES, &json!({"total_score": 15}));
        assert_eq!(context.screen_analysis(), Some(&json!({"total_score": 15})));

        context.fold(tools::SAVE_WORKOUT_PLAN, &json!({"status": "ready_to_save", "plan": {"name": "A"}}));
        context.fold(tools::SAVE_WORKOUT_PLAN, &json!({"status": "ready_to_save", "plan": {"name": "B"}}));
        assert_eq!(context.plan().map(|plan| plan.name.as_str()), Some("B"));
    }

    #[test]
    fn test_volume_becomes_weekly_structure() {
        let mut context = context();
        context.fold(tools::CALCULATE_TRAINING_VOLUME, &json!({"sets_per_session": 5}));
        assert_eq!(context.weekly_structure(), Some(&json!({"sets_per_session": 5})));
        context.fold(tools::GENERATE_WORKOUT_DAY, &json!({"focus": "Upper"}));
        assert!(context.plan().is_none());
    }

    #[test]
    fn test_transcript_grows_by_append() {
        let mut context = context();
        context.push_turn(Turn::user_text("first"));
        context.push_turn(Turn::user_text("second"));
        assert_eq!(context.transcript().len(), 2);
        assert_eq!(context.transcript().last().map(Turn::text).as_deref(), Some("second"));
    }
}
