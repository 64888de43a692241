// ABOUTME: Evaluation models for scoring finished plans against client scenarios
// ABOUTME: Criterion, CriterionResult, EvaluationResult, Scenario, and ExpectedCharacteristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::assessment::Assessment;
use super::preferences::CoachPreferences;
use crate::constants::defaults::RPE_RANGE;

/// The seven scoring criteria, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// No contraindicated exercises
    Safety,
    /// Matches the client's level and RPE band
    Appropriateness,
    /// Intensity rises across the block
    Progression,
    /// Weekly set totals within the tier band
    Volume,
    /// Required exercises are present
    ExerciseSelection,
    /// Weeks, days and fields are complete
    Structure,
    /// Stated goals are addressed
    GoalAlignment,
}

impl Criterion {
    /// Declaration order used for scoring and recommendations
    pub const ALL: [Self; 7] = [
        Self::Safety,
        Self::Appropriateness,
        Self::Progression,
        Self::Volume,
        Self::ExerciseSelection,
        Self::Structure,
        Self::GoalAlignment,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safety => "safety",
            Self::Appropriateness => "appropriateness",
            Self::Progression => "progression",
            Self::Volume => "volume",
            Self::ExerciseSelection => "exercise_selection",
            Self::Structure => "structure",
            Self::GoalAlignment => "goal_alignment",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    /// Which criterion
    pub criterion: Criterion,
    /// Whether the criterion threshold was met
    pub passed: bool,
    /// Score in [0, 1]
    pub score: f64,
    /// One-line description
    pub details: String,
    /// Individual findings
    pub issues: Vec<String>,
}

/// Outcome of evaluating one plan against one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Scenario name
    pub scenario_name: String,
    /// Overall pass (score threshold and safety)
    pub overall_passed: bool,
    /// Weighted score in [0, 1]
    pub overall_score: f64,
    /// Per-criterion results in declaration order
    pub criterion_results: Vec<CriterionResult>,
    /// Grade line
    pub summary: String,
    /// Deduplicated issues from weak criteria
    pub recommendations: Vec<String>,
}

impl EvaluationResult {
    /// Look up one criterion
    #[must_use]
    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionResult> {
        self.criterion_results
            .iter()
            .find(|result| result.criterion == criterion)
    }
}

/// What a good plan for a scenario should look like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedCharacteristics {
    /// Terms that must not appear in exercise names
    #[serde(default)]
    pub should_avoid: Vec<String>,
    /// Terms that should appear in exercise names
    #[serde(default)]
    pub should_include: Vec<String>,
    /// Qualitative properties (informational)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub should_have: Vec<String>,
    /// Qualitative volume label (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_level: Option<String>,
    /// Inclusive RPE band
    #[serde(default = "default_rpe_range")]
    pub rpe_range: [f64; 2],
    /// Longest acceptable session (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_duration_max: Option<u16>,
}

const fn default_rpe_range() -> [f64; 2] {
    RPE_RANGE
}

impl Default for ExpectedCharacteristics {
    fn default() -> Self {
        Self {
            should_avoid: Vec::new(),
            should_include: Vec::new(),
            should_have: Vec::new(),
            volume_level: None,
            rpe_range: RPE_RANGE,
            session_duration_max: None,
        }
    }
}

/// A reference client used to evaluate the planner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name
    pub name: String,
    /// What the scenario exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Client assessment
    #[serde(default)]
    pub assessment: Assessment,
    /// Coach preferences
    #[serde(default)]
    pub coach_preferences: CoachPreferences,
    /// Expected plan characteristics
    #[serde(default)]
    pub expected_characteristics: ExpectedCharacteristics,
}
