// ABOUTME: Client assessment model consumed by the planning pipeline
// ABOUTME: Movement screen sub-scores, goals, experience, availability, and injury history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::training::ExperienceLevel;
use crate::constants::screen::MAX_SUB_SCORE;

/// The seven movements of the functional movement screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenMovement {
    /// Overhead deep squat
    DeepSquat,
    /// Hurdle step (single-leg stance)
    HurdleStep,
    /// Inline lunge
    InlineLunge,
    /// Shoulder mobility reach
    ShoulderMobility,
    /// Active straight leg raise
    ActiveStraightLegRaise,
    /// Trunk stability push-up
    TrunkStabilityPushup,
    /// Rotary stability
    RotaryStability,
}

impl ScreenMovement {
    /// Screen order
    pub const ALL: [Self; 7] = [
        Self::DeepSquat,
        Self::HurdleStep,
        Self::InlineLunge,
        Self::ShoulderMobility,
        Self::ActiveStraightLegRaise,
        Self::TrunkStabilityPushup,
        Self::RotaryStability,
    ];

    /// Field name used in tool inputs and assessment payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeepSquat => "deep_squat",
            Self::HurdleStep => "hurdle_step",
            Self::InlineLunge => "inline_lunge",
            Self::ShoulderMobility => "shoulder_mobility",
            Self::ActiveStraightLegRaise => "active_straight_leg_raise",
            Self::TrunkStabilityPushup => "trunk_stability_pushup",
            Self::RotaryStability => "rotary_stability",
        }
    }
}

/// Movement screen sub-scores (0-3 each)
///
/// `total_score` is the value cached by whoever recorded the screen; it is
/// carried for round-tripping but [`MovementScreenScores::total`] is always
/// recomputed from the sub-scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementScreenScores {
    /// Deep squat score
    #[serde(default = "max_sub_score")]
    pub deep_squat: u8,
    /// Hurdle step score
    #[serde(default = "max_sub_score")]
    pub hurdle_step: u8,
    /// Inline lunge score
    #[serde(default = "max_sub_score")]
    pub inline_lunge: u8,
    /// Shoulder mobility score
    #[serde(default = "max_sub_score")]
    pub shoulder_mobility: u8,
    /// Active straight leg raise score
    #[serde(default = "max_sub_score")]
    pub active_straight_leg_raise: u8,
    /// Trunk stability push-up score
    #[serde(default = "max_sub_score")]
    pub trunk_stability_pushup: u8,
    /// Rotary stability score
    #[serde(default = "max_sub_score")]
    pub rotary_stability: u8,
    /// Total as recorded with the assessment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u8>,
}

const fn max_sub_score() -> u8 {
    MAX_SUB_SCORE
}

impl MovementScreenScores {
    /// Build scores in screen order, clamping each to the 0-3 scale
    #[must_use]
    pub fn new(scores: [u8; 7]) -> Self {
        let [deep_squat, hurdle_step, inline_lunge, shoulder_mobility, active_straight_leg_raise, trunk_stability_pushup, rotary_stability] =
            scores.map(|score| score.min(MAX_SUB_SCORE));
        let mut built = Self {
            deep_squat,
            hurdle_step,
            inline_lunge,
            shoulder_mobility,
            active_straight_leg_raise,
            trunk_stability_pushup,
            rotary_stability,
            total_score: None,
        };
        built.total_score = Some(built.total());
        built
    }

    /// Sub-score for one movement, clamped to the 0-3 scale
    #[must_use]
    pub fn score(&self, movement: ScreenMovement) -> u8 {
        let raw = match movement {
            ScreenMovement::DeepSquat => self.deep_squat,
            ScreenMovement::HurdleStep => self.hurdle_step,
            ScreenMovement::InlineLunge => self.inline_lunge,
            ScreenMovement::ShoulderMobility => self.shoulder_mobility,
            ScreenMovement::ActiveStraightLegRaise => self.active_straight_leg_raise,
            ScreenMovement::TrunkStabilityPushup => self.trunk_stability_pushup,
            ScreenMovement::RotaryStability => self.rotary_stability,
        };
        raw.min(MAX_SUB_SCORE)
    }

    /// Sum of the seven sub-scores (never above 21)
    #[must_use]
    pub fn total(&self) -> u8 {
        ScreenMovement::ALL
            .iter()
            .map(|movement| self.score(*movement))
            .sum()
    }
}

impl Default for MovementScreenScores {
    fn default() -> Self {
        Self::new([MAX_SUB_SCORE; 7])
    }
}

/// Body composition metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
}

/// Stated goals, with `priority_focus` driving goal-alignment scoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessGoals {
    /// Short-term goal text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_term: Option<String>,
    /// Long-term goal text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_term: Option<String>,
    /// Prioritized goal keys (e.g. `fat_loss`, `strength`)
    #[serde(default)]
    pub priority_focus: Vec<String>,
}

/// Training background
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseHistory {
    /// Experience tier
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Current sessions per week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_frequency: Option<u8>,
    /// Sports played previously
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub past_sports: Vec<String>,
    /// Current activities
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current_activities: Vec<String>,
}

/// Scheduling and equipment constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Training days per week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_week: Option<u8>,
    /// Minutes per session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_per_session: Option<u16>,
    /// Preferred weekday names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_days: Vec<String>,
    /// Equipment the client can use
    #[serde(default)]
    pub equipment_access: Vec<String>,
    /// Where the client trains (home, gym, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_location: Option<String>,
}

/// Injury and limitation history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryHistory {
    /// Resolved past injuries
    #[serde(default)]
    pub past_injuries: Vec<String>,
    /// Limitations present today
    #[serde(default)]
    pub current_limitations: Vec<String>,
    /// Areas that currently hurt
    #[serde(default)]
    pub pain_areas: Vec<String>,
}

impl InjuryHistory {
    /// All entries, past injuries first
    #[must_use]
    pub fn all(&self) -> Vec<String> {
        self.past_injuries
            .iter()
            .chain(&self.current_limitations)
            .chain(&self.pain_areas)
            .cloned()
            .collect()
    }
}

/// Structured client fitness assessment
///
/// Sections outside the planning model (lifestyle, strength baseline,
/// health history) are preserved verbatim in `additional` so prompts see
/// everything the coach recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Movement screen sub-scores
    #[serde(default)]
    pub fms_scores: MovementScreenScores,
    /// Body metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_metrics: Option<BodyMetrics>,
    /// Goals
    #[serde(default)]
    pub fitness_goals: FitnessGoals,
    /// Training background
    #[serde(default)]
    pub exercise_history: ExerciseHistory,
    /// Scheduling constraints
    #[serde(default)]
    pub availability: Availability,
    /// Injuries and limitations
    #[serde(default)]
    pub injuries: InjuryHistory,
    /// Any other assessment sections
    #[serde(flatten)]
    pub additional: Map<String, Value>,
}

impl Assessment {
    /// Experience tier of the client
    #[must_use]
    pub fn experience(&self) -> ExperienceLevel {
        self.exercise_history.experience_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_clamped_scores() {
        let scores = MovementScreenScores::new([1, 2, 2, 1, 2, 2, 9]);
        assert_eq!(scores.rotary_stability, 3);
        assert_eq!(scores.total(), 13);
        assert_eq!(scores.total_score, Some(13));
    }

    #[test]
    fn test_cached_total_is_ignored() {
        let scores: MovementScreenScores = serde_json::from_value(serde_json::json!({
            "deep_squat": 2, "hurdle_step": 2, "inline_lunge": 2, "shoulder_mobility": 2,
            "active_straight_leg_raise": 2, "trunk_stability_pushup": 2, "rotary_stability": 2,
            "total_score": 20
        }))
        .unwrap();
        assert_eq!(scores.total(), 14);
    }

    #[test]
    fn test_unknown_sections_are_preserved() {
        let assessment: Assessment = serde_json::from_value(serde_json::json!({
            "exercise_history": {"experience_level": "beginner"},
            "lifestyle": {"sleep_hours": 6}
        }))
        .unwrap();
        assert_eq!(assessment.experience(), ExperienceLevel::Beginner);
        assert_eq!(assessment.additional["lifestyle"]["sleep_hours"], 6);
        assert_eq!(assessment.fms_scores.total(), 21);
    }
}
