// ABOUTME: Integration tests for the scenario evaluation harness
// ABOUTME: Runs scenarios offline and with a scripted model, and checks the JSON report on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::sync::Arc;

use coachforge::agent::PlanOrchestrator;
use coachforge::config::PlannerConfig;
use coachforge::evals::{find_scenarios, load_scenarios, EvaluationHarness, ScenarioSuite};
use coachforge::llm::OfflineModel;
use coachforge_core::constants::tools;
use coachforge_core::models::PlanSource;
use coachforge_intelligence::evaluation::PlanEvaluator;
use serde_json::Value;
use tempfile::TempDir;

mod common;

use common::{text_response, tool_response, ScriptedModel};

fn offline_harness() -> EvaluationHarness {
    let orchestrator = PlanOrchestrator::new(Arc::new(OfflineModel::new()), &PlannerConfig::default());
    EvaluationHarness::new(orchestrator, PlanEvaluator::new())
}

#[tokio::test]
async fn test_offline_quick_suite() {
    let scenarios = load_scenarios(ScenarioSuite::Quick).unwrap();
    let summary = offline_harness().run(&scenarios).await;

    assert_eq!(summary.total_tests, 1);
    assert_eq!(summary.passed + summary.failed, 1);
    assert_eq!(summary.results[0].name, "Basic Beginner Test");
    assert_eq!(summary.results[0].plan_source, PlanSource::Fallback);
    assert_eq!(summary.results[0].criteria.len(), 7);
    assert!((summary.average_score - summary.results[0].score).abs() < 1e-9);
    assert!(summary.finished_at >= summary.started_at);
}

#[tokio::test]
async fn test_reports_follow_scenario_order() {
    let scenarios = load_scenarios(ScenarioSuite::Full).unwrap();
    let summary = offline_harness().run(&scenarios).await;

    let names: Vec<&str> = summary.results.iter().map(|report| report.name.as_str()).collect();
    let expected: Vec<&str> = scenarios.iter().map(|scenario| scenario.name.as_str()).collect();
    assert_eq!(names, expected);
    assert_eq!(summary.all_passed(), summary.failed == 0);
}

#[tokio::test]
async fn test_saved_plan_is_scored() {
    let scenario = find_scenarios("Beginner with Movement").unwrap().remove(0);
    let model = Arc::new(ScriptedModel::new(vec![
        text_response("Analyzed."),
        text_response("Selected."),
        text_response("Structured."),
        tool_response("toolu_1", tools::SAVE_WORKOUT_PLAN, common::beginner_plan_input()),
        text_response("Saved."),
        text_response("Reviewed."),
    ]));
    let orchestrator = PlanOrchestrator::new(model, &PlannerConfig::default());
    let harness = EvaluationHarness::new(orchestrator, PlanEvaluator::new());

    let report = harness.run_scenario(&scenario).await;

    assert_eq!(report.plan_source, PlanSource::Saved);
    assert_eq!(report.plan.name, "Foundations Block");
    // the fixture plan has no mobility work
    assert!(report
        .recommendations
        .iter()
        .any(|item| item == "Missing expected exercise/pattern: mobility work"));
}

#[tokio::test]
async fn test_summary_written_as_json() {
    let scenarios = load_scenarios(ScenarioSuite::Quick).unwrap();
    let summary = offline_harness().run(&scenarios).await;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    summary.write_json(&path).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["total_tests"], 1);
    assert_eq!(written["run_id"], summary.run_id.to_string());
    assert_eq!(written["results"][0]["plan_source"], "fallback");
    assert!(written["results"][0].get("plan").is_none());
}

#[tokio::test]
async fn test_unwritable_path_is_an_error() {
    let summary = offline_harness().run(&[]).await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("results.json");

    assert!(summary.write_json(&path).is_err());
    assert_eq!(summary.total_tests, 0);
    assert!(summary.average_score.abs() < f64::EPSILON);
}
