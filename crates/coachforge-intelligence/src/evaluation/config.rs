// ABOUTME: Scoring configuration for the plan evaluator
// ABOUTME: Criterion weights, per-issue penalties, pass thresholds, and grade boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Evaluator Configuration
//!
//! The constants here are heuristics rather than derived values, so they
//! live in a configuration struct whose `Default` carries the reference
//! calibration.

use coachforge_core::models::Criterion;
use serde::{Deserialize, Serialize};

/// Scoring policy of one criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionPolicy {
    /// Contribution to the overall score
    pub weight: f64,
    /// Score deducted per issue (unused by ratio-scored criteria)
    pub penalty_per_issue: f64,
    /// Minimum score for the criterion to pass
    pub pass_threshold: f64,
}

impl CriterionPolicy {
    const fn new(weight: f64, penalty_per_issue: f64, pass_threshold: f64) -> Self {
        Self {
            weight,
            penalty_per_issue,
            pass_threshold,
        }
    }

    /// `1 - issues * penalty`, floored at zero
    #[must_use]
    pub fn penalized_score(&self, issue_count: usize) -> f64 {
        let deduction = issue_count as f64 * self.penalty_per_issue;
        (1.0 - deduction).max(0.0)
    }

    /// Whether a score meets this policy's threshold
    #[must_use]
    pub fn passes(&self, score: f64) -> bool {
        score >= self.pass_threshold
    }
}

/// Grade letters and their minimum overall scores, best first
pub const GRADE_BOUNDARIES: [(&str, f64); 4] = [("A", 0.9), ("B", 0.8), ("C", 0.7), ("D", 0.6)];

/// Complete evaluator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Safety policy; threshold 1.0 means any issue fails
    pub safety: CriterionPolicy,
    /// Appropriateness policy
    pub appropriateness: CriterionPolicy,
    /// Progression policy
    pub progression: CriterionPolicy,
    /// Volume policy
    pub volume: CriterionPolicy,
    /// Exercise selection policy (ratio scored)
    pub exercise_selection: CriterionPolicy,
    /// Structure policy
    pub structure: CriterionPolicy,
    /// Goal alignment policy
    pub goal_alignment: CriterionPolicy,
    /// Minimum weighted score for an overall pass
    pub overall_pass_threshold: f64,
    /// Criteria scoring below this contribute recommendations even when passing
    pub recommendation_threshold: f64,
    /// Number of weeks a complete plan is expected to span
    pub expected_weeks: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            safety: CriterionPolicy::new(0.25, 0.20, 1.0),
            appropriateness: CriterionPolicy::new(0.20, 0.15, 0.70),
            progression: CriterionPolicy::new(0.15, 0.25, 0.70),
            volume: CriterionPolicy::new(0.15, 0.20, 0.70),
            exercise_selection: CriterionPolicy::new(0.10, 0.0, 0.60),
            structure: CriterionPolicy::new(0.10, 0.10, 0.70),
            goal_alignment: CriterionPolicy::new(0.05, 0.25, 0.60),
            overall_pass_threshold: 0.70,
            recommendation_threshold: 0.80,
            expected_weeks: 4,
        }
    }
}

impl ScoringConfig {
    /// Policy for a criterion
    #[must_use]
    pub const fn policy(&self, criterion: Criterion) -> &CriterionPolicy {
        match criterion {
            Criterion::Safety => &self.safety,
            Criterion::Appropriateness => &self.appropriateness,
            Criterion::Progression => &self.progression,
            Criterion::Volume => &self.volume,
            Criterion::ExerciseSelection => &self.exercise_selection,
            Criterion::Structure => &self.structure,
            Criterion::GoalAlignment => &self.goal_alignment,
        }
    }

    /// Override the overall pass threshold
    #[must_use]
    pub fn with_pass_threshold(mut self, threshold: f64) -> Self {
        self.overall_pass_threshold = threshold;
        self
    }

    /// Sum of all criterion weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        Criterion::ALL
            .iter()
            .map(|criterion| self.policy(*criterion).weight)
            .sum()
    }
}

/// Letter grade for an overall score
#[must_use]
pub fn grade_for(score: f64) -> &'static str {
    GRADE_BOUNDARIES
        .iter()
        .find(|(_, minimum)| score >= *minimum)
        .map_or("F", |(grade, _)| *grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = ScoringConfig::default();
        assert!((config.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_penalized_score_floors_at_zero() {
        let policy = ScoringConfig::default().progression;
        assert!((policy.penalized_score(1) - 0.75).abs() < 1e-9);
        assert!(policy.penalized_score(9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grades() {
        assert_eq!(grade_for(0.95), "A");
        assert_eq!(grade_for(0.8), "B");
        assert_eq!(grade_for(0.7), "C");
        assert_eq!(grade_for(0.65), "D");
        assert_eq!(grade_for(0.1), "F");
    }
}
