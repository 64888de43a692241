// ABOUTME: Integration tests for the planning tool registry and its six domain tools
// ABOUTME: Covers the tool catalog contract, dispatch, and structured error results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coachforge::tools::{ToolCapabilities, ToolExecutionContext, ToolRegistry};
use coachforge_core::constants::tools;
use serde_json::{json, Value};

mod common;

fn required_fields(registry: &ToolRegistry, name: &str) -> Vec<String> {
    let definition = registry
        .definitions()
        .into_iter()
        .find(|definition| definition.name == name)
        .unwrap();
    serde_json::from_value(definition.input_schema["required"].clone()).unwrap()
}

// ============================================================================
// Tool Catalog
// ============================================================================

#[test]
fn test_catalog_lists_six_tools_in_order() {
    let registry = ToolRegistry::builtin();
    let names: Vec<String> = registry
        .definitions()
        .into_iter()
        .map(|definition| definition.name)
        .collect();
    assert_eq!(names, tools::ALL);
    assert_eq!(registry.tool_names(), tools::ALL);
}

#[test]
fn test_required_fields_contract() {
    let registry = ToolRegistry::builtin();
    assert_eq!(required_fields(&registry, tools::ANALYZE_FMS_SCORES), ["fms_scores"]);
    assert_eq!(
        required_fields(&registry, tools::QUERY_EXERCISE_LIBRARY),
        ["movement_pattern"]
    );
    assert_eq!(
        required_fields(&registry, tools::CALCULATE_TRAINING_VOLUME),
        ["experience_level", "training_phase", "primary_goal", "days_per_week"]
    );
    assert_eq!(
        required_fields(&registry, tools::GENERATE_WORKOUT_DAY),
        ["day_focus", "movement_patterns", "training_phase"]
    );
    assert_eq!(
        required_fields(&registry, tools::CHECK_EXERCISE_COMPATIBILITY),
        ["exercise_name", "movement_pattern"]
    );
    assert_eq!(
        required_fields(&registry, tools::SAVE_WORKOUT_PLAN),
        ["plan_name", "weeks", "workout_days"]
    );
}

#[test]
fn test_enum_sets_in_schemas() {
    let registry = ToolRegistry::builtin();
    let definitions = registry.definitions();
    let schema = |name: &str| -> Value {
        definitions
            .iter()
            .find(|definition| definition.name == name)
            .map(|definition| definition.input_schema.clone())
            .unwrap()
    };

    assert_eq!(
        schema(tools::QUERY_EXERCISE_LIBRARY)["properties"]["movement_pattern"]["enum"],
        json!(["squat", "hinge", "push", "pull", "carry", "core", "mobility", "cardio"])
    );
    assert_eq!(
        schema(tools::CALCULATE_TRAINING_VOLUME)["properties"]["training_phase"]["enum"],
        json!(["anatomical_adaptation", "hypertrophy", "strength", "power", "deload"])
    );
    assert_eq!(
        schema(tools::GENERATE_WORKOUT_DAY)["properties"]["training_phase"]["enum"],
        json!(["anatomical_adaptation", "hypertrophy", "strength", "power"])
    );
    assert_eq!(
        schema(tools::CALCULATE_TRAINING_VOLUME)["properties"]["primary_goal"]["enum"],
        json!(["strength", "hypertrophy", "endurance", "fat_loss", "general_fitness"])
    );
}

#[test]
fn test_capability_filtering() {
    let registry = ToolRegistry::builtin();
    assert_eq!(
        registry.filter_by_capabilities(ToolCapabilities::PRODUCES_PLAN),
        [tools::GENERATE_WORKOUT_DAY, tools::SAVE_WORKOUT_PLAN]
    );
    assert_eq!(
        registry.filter_by_capabilities(ToolCapabilities::READS_CATALOG),
        [tools::QUERY_EXERCISE_LIBRARY]
    );
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_screen_analysis_through_registry() {
    let registry = ToolRegistry::builtin();
    let input = json!({
        "fms_scores": {
            "deep_squat": 1,
            "hurdle_step": 2,
            "inline_lunge": 2,
            "shoulder_mobility": 1,
            "active_straight_leg_raise": 2,
            "trunk_stability_pushup": 2,
            "rotary_stability": 2
        },
        "injury_history": ["lower back pain"]
    });

    let outcome = registry.execute(tools::ANALYZE_FMS_SCORES, &input, &ToolExecutionContext::builtin());
    assert!(!outcome.is_error);
    assert_eq!(outcome.value["total_score"], 12);
    assert_eq!(outcome.value["max_score"], 21);
    assert_eq!(outcome.value["risk_level"], "HIGH");
    assert_eq!(outcome.value["injury_considerations"], json!(["lower back pain"]));
}

#[test]
fn test_volume_sets_per_session_uses_integer_division() {
    let registry = ToolRegistry::builtin();
    let input = json!({
        "experience_level": "intermediate",
        "training_phase": "hypertrophy",
        "primary_goal": "hypertrophy",
        "days_per_week": 4
    });

    let outcome = registry.execute(
        tools::CALCULATE_TRAINING_VOLUME,
        &input,
        &ToolExecutionContext::builtin(),
    );
    assert!(!outcome.is_error);
    assert_eq!(outcome.value["weekly_sets_per_muscle"], 15);
    assert_eq!(outcome.value["sets_per_session"], 3);
    assert_eq!(outcome.value["training_days"], 4);
}

#[test]
fn test_zero_days_is_an_error_result() {
    let registry = ToolRegistry::builtin();
    let input = json!({
        "experience_level": "beginner",
        "training_phase": "strength",
        "primary_goal": "strength",
        "days_per_week": 0
    });

    let outcome = registry.execute(
        tools::CALCULATE_TRAINING_VOLUME,
        &input,
        &ToolExecutionContext::builtin(),
    );
    assert!(outcome.is_error);
    assert_eq!(outcome.value["code"], "INVALID_INPUT");
}

#[test]
fn test_unknown_tool_is_an_error_result() {
    let registry = ToolRegistry::builtin();
    let outcome = registry.execute("book_massage", &json!({}), &ToolExecutionContext::builtin());
    assert!(outcome.is_error);
    assert_eq!(outcome.value["code"], "RESOURCE_NOT_FOUND");
    assert!(outcome.content().contains("book_massage"));
}

#[test]
fn test_missing_field_is_an_error_result() {
    let registry = ToolRegistry::builtin();
    let outcome = registry.execute(
        tools::CHECK_EXERCISE_COMPATIBILITY,
        &json!({"exercise_name": "Overhead Press"}),
        &ToolExecutionContext::builtin(),
    );
    assert!(outcome.is_error);
    assert_eq!(outcome.value["code"], "MISSING_REQUIRED_FIELD");
    assert!(outcome.value["error"]
        .as_str()
        .unwrap()
        .contains("movement_pattern"));
}

#[test]
fn test_save_plan_echoes_plan() {
    let registry = ToolRegistry::builtin();
    let outcome = registry.execute(
        tools::SAVE_WORKOUT_PLAN,
        &common::beginner_plan_input(),
        &ToolExecutionContext::builtin(),
    );
    assert!(!outcome.is_error);
    assert_eq!(outcome.value["status"], "ready_to_save");
    assert_eq!(outcome.value["plan"]["name"], "Foundations Block");
    assert_eq!(outcome.value["plan"]["workout_days"].as_array().unwrap().len(), 12);
    assert_eq!(outcome.value["plan"]["coach_notes"], "Keep two reps in reserve.");
}

#[test]
fn test_save_plan_keeps_every_exercise_model_sends() {
    let days = json!([
        {
            "week_number": 1,
            "day_of_week": 1,
            "focus": "Upper Body",
            "exercises": [
                {"exercise_name": "Overhead Press", "name": "Overhead Press", "sets": 3, "rpe": 7},
                {"exercise_name": "Goblet Squat", "sets": "3", "reps": "10"},
                {"name": "Zone 2 Cardio", "duration_minutes": 30, "target_hr": 130}
            ]
        },
        {
            "week_number": 1,
            "day_of_week": 3,
            "focus": "Lower Body",
            "exercises": {"exercise_name": "Deadlift"}
        }
    ]);
    let sent: usize = days
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|day| day["exercises"].as_array())
        .map(Vec::len)
        .sum();

    let registry = ToolRegistry::builtin();
    let outcome = registry.execute(
        tools::SAVE_WORKOUT_PLAN,
        &json!({"plan_name": "Mixed Keys", "weeks": 4, "workout_days": days}),
        &ToolExecutionContext::builtin(),
    );
    assert!(!outcome.is_error);

    let saved: Vec<&str> = outcome.value["plan"]["workout_days"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|day| day["exercises"].as_array().unwrap())
        .map(|exercise| exercise["exercise_name"].as_str().unwrap())
        .collect();
    assert_eq!(saved.len(), sent);
    assert_eq!(saved, ["Overhead Press", "Goblet Squat", "Zone 2 Cardio"]);
}
