// ABOUTME: Plan orchestrator running the five planning steps over one shared context
// ABOUTME: Returns the model's saved plan or synthesizes the deterministic fallback plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Orchestrator
//!
//! Steps run strictly in sequence:
//!
//! 1. `analyze_assessment`
//! 2. `select_exercises`
//! 3. `design_weekly_structure`
//! 4. `generate_full_plan`
//! 5. `review_and_refine`
//!
//! A run never fails. If no step packaged a plan, the fallback template plan
//! is returned and the outcome is marked [`PlanSource::Fallback`].

use std::collections::BTreeMap;
use std::sync::Arc;

use coachforge_core::constants::defaults::{DAYS_PER_WEEK, SESSION_MINUTES};
use coachforge_core::constants::{steps, tools};
use coachforge_core::models::{Assessment, CoachPreferences, ExerciseRecord, Plan, PlanSource};
use coachforge_intelligence::catalog::ExerciseCatalog;
use coachforge_intelligence::fallback::synthesize_fallback_plan;
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::context::{PlanningContext, StepMetadata};
use super::prompts;
use super::step::{StepDefinition, StepLimits, StepOrchestrator};
use crate::config::PlannerConfig;
use crate::llm::LanguageModel;
use crate::tools::{ToolCapabilities, ToolRegistry};

/// Result of one planning run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOutcome {
    /// The plan handed back to the caller
    pub plan: Plan,
    /// Whether the plan was saved by the model or synthesized
    pub source: PlanSource,
    /// Metadata of every step, keyed by step name
    pub steps: BTreeMap<String, StepMetadata>,
}

/// The five steps with their instructions for this client
#[must_use]
pub fn planning_steps(assessment: &Assessment) -> Vec<StepDefinition> {
    let days = assessment
        .availability
        .days_per_week
        .filter(|days| *days > 0)
        .unwrap_or(DAYS_PER_WEEK);
    let minutes = assessment
        .availability
        .minutes_per_session
        .filter(|minutes| *minutes > 0)
        .unwrap_or(SESSION_MINUTES);

    let instruction = |step: &str| prompts::step_template(step).unwrap_or_default().to_owned();

    vec![
        StepDefinition {
            name: steps::ANALYZE_ASSESSMENT,
            instruction: instruction(steps::ANALYZE_ASSESSMENT),
            expected_tools: &[tools::ANALYZE_FMS_SCORES],
        },
        StepDefinition {
            name: steps::SELECT_EXERCISES,
            instruction: instruction(steps::SELECT_EXERCISES),
            expected_tools: &[tools::QUERY_EXERCISE_LIBRARY, tools::CHECK_EXERCISE_COMPATIBILITY],
        },
        StepDefinition {
            name: steps::DESIGN_WEEKLY_STRUCTURE,
            instruction: prompts::weekly_structure_prompt(days, minutes),
            expected_tools: &[tools::CALCULATE_TRAINING_VOLUME],
        },
        StepDefinition {
            name: steps::GENERATE_FULL_PLAN,
            instruction: instruction(steps::GENERATE_FULL_PLAN),
            expected_tools: &[tools::GENERATE_WORKOUT_DAY, tools::SAVE_WORKOUT_PLAN],
        },
        StepDefinition {
            name: steps::REVIEW_AND_REFINE,
            instruction: instruction(steps::REVIEW_AND_REFINE),
            expected_tools: &[tools::CHECK_EXERCISE_COMPATIBILITY, tools::SAVE_WORKOUT_PLAN],
        },
    ]
}

/// Turns an assessment into a training plan through the planning conversation
#[derive(Clone)]
pub struct PlanOrchestrator {
    steps: StepOrchestrator,
    catalog: Arc<ExerciseCatalog>,
}

impl PlanOrchestrator {
    /// Orchestrator over the built-in tools and catalog
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>, config: &PlannerConfig) -> Self {
        Self::with_registry(model, ToolRegistry::builtin(), config)
    }

    /// Orchestrator over a custom tool registry
    #[must_use]
    pub fn with_registry(
        model: Arc<dyn LanguageModel>,
        registry: ToolRegistry,
        config: &PlannerConfig,
    ) -> Self {
        let limits = StepLimits {
            max_iterations: config.max_iterations,
            max_tokens: config.provider.max_tokens,
            model_timeout: config.provider.timeout,
        };
        let system_prompt = prompts::system_prompt(config.coach_philosophy.as_deref());
        if registry
            .filter_by_capabilities(ToolCapabilities::PRODUCES_PLAN)
            .is_empty()
        {
            warn!("Tool registry has no plan-producing tools, every run will fall back");
        }

        Self {
            steps: StepOrchestrator::new(model, registry, system_prompt).with_limits(limits),
            catalog: Arc::new(ExerciseCatalog::builtin()),
        }
    }

    /// Use the caller's exercise library instead of the built-in catalog
    #[must_use]
    pub fn with_exercise_records(mut self, records: &[ExerciseRecord]) -> Self {
        self.catalog = Arc::new(ExerciseCatalog::from_records(records));
        self
    }

    /// Catalog the tools read
    #[must_use]
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// Run the five steps and return the resulting plan
    #[instrument(skip_all, fields(experience = %assessment.experience()))]
    pub async fn generate_plan(
        &self,
        assessment: &Assessment,
        preferences: &CoachPreferences,
    ) -> PlanOutcome {
        let mut context = PlanningContext::new(
            assessment.clone(),
            preferences.clone(),
            Arc::clone(&self.catalog),
        );

        for step in planning_steps(assessment) {
            self.steps.run(&step, &mut context).await;
        }

        let (plan, steps) = context.into_parts();
        match plan {
            Some(plan) => {
                info!(
                    name = %plan.name,
                    days = plan.workout_days.len(),
                    "Returning plan saved by the model"
                );
                PlanOutcome {
                    plan,
                    source: PlanSource::Saved,
                    steps,
                }
            }
            None => {
                info!("No plan was saved, synthesizing fallback plan");
                PlanOutcome {
                    plan: synthesize_fallback_plan(assessment),
                    source: PlanSource::Fallback,
                    steps,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use coachforge_core::models::Availability;

    use super::*;

    #[test]
    fn test_steps_in_order_with_schedule() {
        let assessment = Assessment {
            availability: Availability {
                days_per_week: Some(4),
                minutes_per_session: Some(45),
                ..Availability::default()
            },
            ..Assessment::default()
        };
        let definitions = planning_steps(&assessment);
        let names: Vec<&str> = definitions.iter().map(|step| step.name).collect();
        assert_eq!(names, steps::ALL);
        assert!(definitions[2].instruction.contains("Train 4 days per week"));
        assert!(definitions[2].instruction.contains("about 45 minutes"));
    }

    #[test]
    fn test_schedule_defaults() {
        let definitions = planning_steps(&Assessment::default());
        assert!(definitions[2].instruction.contains("Train 3 days per week"));
        assert!(definitions[2].instruction.contains("about 60 minutes"));
    }
}
