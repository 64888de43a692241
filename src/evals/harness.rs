// ABOUTME: Evaluation harness running the planner over reference scenarios
// ABOUTME: Generates one plan per scenario, scores it, and aggregates a JSON-serializable summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Evaluation Harness
//!
//! Scenarios run one after another. Each gets a fresh planning run; the only
//! state carried between scenarios is the list of reports.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use coachforge_core::models::{CriterionResult, Plan, PlanSource, Scenario};
use coachforge_intelligence::evaluation::PlanEvaluator;
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::agent::PlanOrchestrator;
use crate::errors::{AppError, AppResult};

/// Result of one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Overall pass
    pub passed: bool,
    /// Weighted score in [0, 1]
    pub score: f64,
    /// Grade line
    pub summary: String,
    /// Whether the plan was saved by the model or synthesized
    pub plan_source: PlanSource,
    /// Deduplicated issues from weak criteria
    pub recommendations: Vec<String>,
    /// Per-criterion results
    pub criteria: Vec<CriterionResult>,
    /// The evaluated plan
    #[serde(skip)]
    pub plan: Plan,
}

/// Aggregate of one harness run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSummary {
    /// Identifier of this run
    pub run_id: Uuid,
    /// When the first scenario started
    pub started_at: DateTime<Utc>,
    /// When the last scenario finished
    pub finished_at: DateTime<Utc>,
    /// Scenarios run
    pub total_tests: usize,
    /// Scenarios that passed
    pub passed: usize,
    /// Scenarios that failed
    pub failed: usize,
    /// Mean overall score, 0 when nothing ran
    pub average_score: f64,
    /// Reports in scenario order
    pub results: Vec<ScenarioReport>,
}

impl EvaluationSummary {
    fn from_reports(started_at: DateTime<Utc>, results: Vec<ScenarioReport>) -> Self {
        let total_tests = results.len();
        let passed = results.iter().filter(|report| report.passed).count();
        let average_score = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|report| report.score).sum::<f64>() / total_tests as f64
        };

        Self {
            run_id: Uuid::new_v4(),
            started_at,
            finished_at: Utc::now(),
            total_tests,
            passed,
            failed: total_tests - passed,
            average_score,
            results,
        }
    }

    /// Whether every scenario passed
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Pretty-printed JSON form
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the summary cannot be encoded
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON form to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be encoded or the file cannot be written
    pub fn write_json(&self, path: &Path) -> AppResult<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| {
            AppError::internal(format!("Failed to write {}: {e}", path.display())).with_source(e)
        })
    }
}

/// Runs scenarios through the planner and the evaluator
#[derive(Clone)]
pub struct EvaluationHarness {
    orchestrator: PlanOrchestrator,
    evaluator: PlanEvaluator,
}

impl EvaluationHarness {
    /// Create a harness
    #[must_use]
    pub const fn new(orchestrator: PlanOrchestrator, evaluator: PlanEvaluator) -> Self {
        Self {
            orchestrator,
            evaluator,
        }
    }

    /// Generate and score a plan for one scenario
    #[instrument(skip_all, fields(scenario = %scenario.name))]
    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioReport {
        let outcome = self
            .orchestrator
            .generate_plan(&scenario.assessment, &scenario.coach_preferences)
            .await;
        let evaluation = self.evaluator.evaluate(&outcome.plan, scenario);

        if evaluation.overall_passed {
            info!(score = evaluation.overall_score, "Scenario passed");
        } else {
            warn!(
                score = evaluation.overall_score,
                issues = evaluation.recommendations.len(),
                "Scenario failed"
            );
        }

        ScenarioReport {
            name: scenario.name.clone(),
            passed: evaluation.overall_passed,
            score: evaluation.overall_score,
            summary: evaluation.summary,
            plan_source: outcome.source,
            recommendations: evaluation.recommendations,
            criteria: evaluation.criterion_results,
            plan: outcome.plan,
        }
    }

    /// Run every scenario in order and aggregate the results
    #[instrument(skip_all, fields(scenarios = scenarios.len()))]
    pub async fn run(&self, scenarios: &[Scenario]) -> EvaluationSummary {
        let started_at = Utc::now();
        let mut reports = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            reports.push(self.run_scenario(scenario).await);
        }

        let summary = EvaluationSummary::from_reports(started_at, reports);
        info!(
            passed = summary.passed,
            failed = summary.failed,
            average_score = summary.average_score,
            "Evaluation run complete"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, passed: bool, score: f64) -> ScenarioReport {
        ScenarioReport {
            name: name.to_owned(),
            passed,
            score,
            summary: String::new(),
            plan_source: PlanSource::Fallback,
            recommendations: Vec::new(),
            criteria: Vec::new(),
            plan: Plan::default(),
        }
    }

    #[test]
    fn test_counts_and_mean() {
        let summary = EvaluationSummary::from_reports(
            Utc::now(),
            vec![report("a", true, 0.9), report("b", false, 0.5)],
        );
        assert_eq!(summary.total_tests, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert!((summary.average_score - 0.7).abs() < 1e-9);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_empty_run_scores_zero() {
        let summary = EvaluationSummary::from_reports(Utc::now(), Vec::new());
        assert!(summary.average_score.abs() < f64::EPSILON);
        assert!(summary.all_passed());
    }

    #[test]
    fn test_json_omits_plan() {
        let summary = EvaluationSummary::from_reports(Utc::now(), vec![report("a", true, 1.0)]);
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"plan_source\": \"fallback\""));
        assert!(!json.contains("\"plan\":"));
    }
}
