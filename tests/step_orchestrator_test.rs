// ABOUTME: Integration tests for the per-step tool-calling loop
// ABOUTME: Drives steps with a scripted model to check batching, ceilings, and failure handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use coachforge::agent::{PlanningContext, StepDefinition, StepLimits, StepOrchestrator};
use coachforge::errors::ProviderError;
use coachforge::llm::{ContentBlock, ModelResponse, Role};
use coachforge::tools::ToolRegistry;
use coachforge_core::constants::{steps, tools};
use coachforge_core::models::{CoachPreferences, Plan};
use coachforge_intelligence::catalog::ExerciseCatalog;
use serde_json::json;

mod common;

use common::{text_response, tool_response, ScriptedModel};

fn step(name: &'static str) -> StepDefinition {
    StepDefinition {
        name,
        instruction: "Work through this step.".to_owned(),
        expected_tools: &[],
    }
}

fn context() -> PlanningContext {
    PlanningContext::new(
        common::beginner_assessment(),
        CoachPreferences::default(),
        Arc::new(ExerciseCatalog::builtin()),
    )
}

fn orchestrator(model: &Arc<ScriptedModel>) -> StepOrchestrator {
    StepOrchestrator::new(Arc::<ScriptedModel>::clone(model), ToolRegistry::builtin(), "You are a coach.")
}

// ============================================================================
// Loop Behaviour
// ============================================================================

#[tokio::test]
async fn test_text_only_response_ends_step() {
    let model = Arc::new(ScriptedModel::new(vec![text_response("Assessment reviewed.")]));
    let mut context = context();

    let metadata = orchestrator(&model)
        .run(&step(steps::ANALYZE_ASSESSMENT), &mut context)
        .await;

    assert_eq!(metadata.iterations, 1);
    assert_eq!(metadata.final_response, "Assessment reviewed.");
    assert_eq!(model.call_count(), 1);
    assert_eq!(context.transcript().len(), 2);
    assert_eq!(
        context.step_metadata().get(steps::ANALYZE_ASSESSMENT),
        Some(&metadata)
    );

    let request = &model.requests()[0];
    assert_eq!(request.system, "You are a coach.");
    assert_eq!(request.tool_names, tools::ALL);
    assert!(request.last_text().contains("## Client Assessment Data"));
}

#[tokio::test]
async fn test_every_invocation_answered_before_next_call() {
    let batch = ModelResponse::from_blocks(vec![
        ContentBlock::text("Looking up exercises."),
        ContentBlock::tool_use(
            "toolu_1",
            tools::QUERY_EXERCISE_LIBRARY,
            json!({"movement_pattern": "squat", "difficulty": "beginner"}),
        ),
        ContentBlock::tool_use("toolu_2", "book_massage", json!({})),
        ContentBlock::tool_use(
            "toolu_3",
            tools::QUERY_EXERCISE_LIBRARY,
            json!({"movement_pattern": "core", "difficulty": "beginner"}),
        ),
    ]);
    let model = Arc::new(ScriptedModel::new(vec![batch, text_response("Selected.")]));
    let mut context = context();

    let metadata = orchestrator(&model)
        .run(&step(steps::SELECT_EXERCISES), &mut context)
        .await;

    assert_eq!(metadata.iterations, 2);
    assert_eq!(metadata.final_response, "Selected.");

    let second = &model.requests()[1];
    let results = second.last_tool_results();
    let ids: Vec<&str> = results.iter().map(|(id, _, _)| id.as_str()).collect();
    assert_eq!(ids, ["toolu_1", "toolu_2", "toolu_3"]);
    assert!(!results[0].2);
    assert!(results[1].2, "unknown tool must come back as an error result");
    assert!(results[1].1.contains("RESOURCE_NOT_FOUND"));
    assert!(!results[2].2);

    // both successful queries appended their entries
    let names: Vec<&str> = context
        .exercise_candidates()
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert!(names.contains(&"Goblet Squat"));
    assert!(names.len() > 2);
}

#[tokio::test]
async fn test_iteration_ceiling_forces_done() {
    let model = Arc::new(ScriptedModel::always(tool_response(
        "toolu_loop",
        tools::CALCULATE_TRAINING_VOLUME,
        json!({
            "experience_level": "beginner",
            "training_phase": "anatomical_adaptation",
            "primary_goal": "general_fitness",
            "days_per_week": 3
        }),
    )));
    let limits = StepLimits {
        max_iterations: 3,
        ..StepLimits::default()
    };
    let mut context = context();

    let metadata = orchestrator(&model)
        .with_limits(limits)
        .run(&step(steps::DESIGN_WEEKLY_STRUCTURE), &mut context)
        .await;

    assert_eq!(metadata.iterations, 3);
    assert_eq!(model.call_count(), 3);
    assert_eq!(context.weekly_structure().unwrap()["sets_per_session"], 3);
    // the last batch was still executed and answered
    let last = context.transcript().last().unwrap();
    assert_eq!(last.role, Role::User);
}

#[tokio::test]
async fn test_save_replaces_plan_in_context() {
    let model = Arc::new(ScriptedModel::new(vec![
        tool_response("toolu_1", tools::SAVE_WORKOUT_PLAN, common::beginner_plan_input()),
        text_response("Plan saved."),
    ]));
    let mut context = context();

    orchestrator(&model)
        .run(&step(steps::GENERATE_FULL_PLAN), &mut context)
        .await;

    let plan: &Plan = context.plan().unwrap();
    assert_eq!(plan.name, "Foundations Block");
    assert_eq!(plan.workout_days.len(), 12);
}

// ============================================================================
// Provider Failures
// ============================================================================

#[tokio::test]
async fn test_provider_error_is_an_empty_response() {
    let model = Arc::new(ScriptedModel::with_results(vec![Err(ProviderError::Api {
        status: 529,
        message: "overloaded".to_owned(),
    })]));
    let mut context = context();

    let metadata = orchestrator(&model)
        .run(&step(steps::ANALYZE_ASSESSMENT), &mut context)
        .await;

    assert_eq!(metadata.iterations, 1);
    assert!(metadata.final_response.is_empty());
    // only the prompt was recorded
    assert_eq!(context.transcript().len(), 1);
}

#[tokio::test]
async fn test_timeout_is_an_empty_response() {
    let model = Arc::new(
        ScriptedModel::new(vec![text_response("too late")]).with_delay(Duration::from_millis(500)),
    );
    let limits = StepLimits {
        model_timeout: Duration::from_millis(20),
        ..StepLimits::default()
    };
    let mut context = context();

    let metadata = orchestrator(&model)
        .with_limits(limits)
        .run(&step(steps::REVIEW_AND_REFINE), &mut context)
        .await;

    assert_eq!(metadata.iterations, 1);
    assert!(metadata.final_response.is_empty());
    assert!(context.plan().is_none());
}
