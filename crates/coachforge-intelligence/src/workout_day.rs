// ABOUTME: Training day synthesis with warm-up, main work, and cool-down sections
// ABOUTME: Stamps seed exercises with phase-specific sets, reps, and RPE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachforge_core::constants::defaults::SESSION_MINUTES;
use coachforge_core::models::TrainingPhase;
use serde::{Deserialize, Serialize};

/// Minutes reserved for warm-up and cool-down
const BOOKEND_MINUTES: u16 = 20;

/// Phase-specific set, rep and RPE parameters for main work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseParameters {
    /// Sets per exercise
    pub sets: u32,
    /// Reps per set
    pub reps: String,
    /// Target RPE
    pub rpe: u32,
}

impl PhaseParameters {
    /// Parameters for a phase; deload uses hypertrophy parameters
    #[must_use]
    pub fn for_phase(phase: TrainingPhase) -> Self {
        let (sets, reps, rpe) = match phase {
            TrainingPhase::AnatomicalAdaptation => (3, "12-15", 6),
            TrainingPhase::Hypertrophy | TrainingPhase::Deload => (4, "8-12", 7),
            TrainingPhase::Strength => (4, "4-6", 8),
            TrainingPhase::Power => (3, "3-5", 7),
        };
        Self {
            sets,
            reps: reps.to_owned(),
            rpe,
        }
    }
}

/// Exercise suggested for main work
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedExercise {
    /// Exercise name
    #[serde(default = "default_seed_name")]
    pub name: String,
    /// Optional category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn default_seed_name() -> String {
    "Exercise".to_owned()
}

/// Inputs of a day synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRequest {
    /// Focus label
    pub day_focus: String,
    /// Movement patterns covered in the session
    pub movement_patterns: Vec<String>,
    /// Periodization phase
    pub phase: TrainingPhase,
    /// Session length in minutes
    pub session_duration_minutes: u16,
    /// Main-work exercises
    pub exercises: Vec<SeedExercise>,
}

impl DayRequest {
    /// Request with the default session length and no seed exercises
    #[must_use]
    pub fn new(day_focus: impl Into<String>, phase: TrainingPhase) -> Self {
        Self {
            day_focus: day_focus.into(),
            movement_patterns: Vec::new(),
            phase,
            session_duration_minutes: SESSION_MINUTES,
            exercises: Vec::new(),
        }
    }
}

/// One item inside a session section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionItem {
    /// Free-form activity (warm-up and cool-down)
    Activity(String),
    /// Prescribed main-work exercise
    Prescribed {
        /// Exercise name
        name: String,
        /// Sets
        sets: u32,
        /// Reps
        reps: String,
        /// Target RPE
        rpe: u32,
    },
}

/// A timed block of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSection {
    /// Section title
    pub section: String,
    /// Duration label
    pub duration: String,
    /// Section content
    pub exercises: Vec<SectionItem>,
}

/// Three-section training day skeleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDayTemplate {
    /// Focus label
    pub focus: String,
    /// Phase
    pub phase: TrainingPhase,
    /// Movement patterns, echoed
    pub movement_patterns: Vec<String>,
    /// Session length in minutes
    pub estimated_duration: u16,
    /// Warm-up, main work, cool-down
    pub structure: Vec<SessionSection>,
    /// Parameters applied to main work
    pub volume_parameters: PhaseParameters,
}

fn activities(items: &[&str]) -> Vec<SectionItem> {
    items
        .iter()
        .map(|item| SectionItem::Activity((*item).to_owned()))
        .collect()
}

/// Build a warm-up / main work / cool-down skeleton for one day
#[must_use]
pub fn synthesize_workout_day(request: &DayRequest) -> WorkoutDayTemplate {
    let params = PhaseParameters::for_phase(request.phase);
    let main_minutes = request
        .session_duration_minutes
        .saturating_sub(BOOKEND_MINUTES);

    let main_work = request
        .exercises
        .iter()
        .map(|exercise| SectionItem::Prescribed {
            name: exercise.name.clone(),
            sets: params.sets,
            reps: params.reps.clone(),
            rpe: params.rpe,
        })
        .collect();

    WorkoutDayTemplate {
        focus: request.day_focus.clone(),
        phase: request.phase,
        movement_patterns: request.movement_patterns.clone(),
        estimated_duration: request.session_duration_minutes,
        structure: vec![
            SessionSection {
                section: "Warm-Up".to_owned(),
                duration: "10 min".to_owned(),
                exercises: activities(&["Dynamic stretching", "Movement prep"]),
            },
            SessionSection {
                section: "Main Work".to_owned(),
                duration: format!("{main_minutes} min"),
                exercises: main_work,
            },
            SessionSection {
                section: "Cool-Down".to_owned(),
                duration: "5-10 min".to_owned(),
                exercises: activities(&["Static stretching", "Foam rolling"]),
            },
        ],
        volume_parameters: params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_skeleton_stamps_seed_exercises() {
        let request = DayRequest {
            exercises: vec![
                SeedExercise {
                    name: "Goblet Squat".into(),
                    category: Some("squat".into()),
                },
                SeedExercise::default(),
            ],
            session_duration_minutes: 45,
            ..DayRequest::new("Lower Body", TrainingPhase::Strength)
        };
        let day = synthesize_workout_day(&request);

        assert_eq!(day.structure.len(), 3);
        assert_eq!(day.structure[0].duration, "10 min");
        assert_eq!(day.structure[1].duration, "25 min");
        assert_eq!(day.structure[2].duration, "5-10 min");
        assert_eq!(
            day.structure[1].exercises[0],
            SectionItem::Prescribed {
                name: "Goblet Squat".into(),
                sets: 4,
                reps: "4-6".into(),
                rpe: 8,
            }
        );
        assert_eq!(day.volume_parameters, PhaseParameters::for_phase(TrainingPhase::Strength));
    }

    #[test]
    fn test_short_sessions_do_not_underflow() {
        let request = DayRequest {
            session_duration_minutes: 15,
            ..DayRequest::new("Mobility", TrainingPhase::AnatomicalAdaptation)
        };
        let day = synthesize_workout_day(&request);
        assert_eq!(day.structure[1].duration, "0 min");
        assert!(day.structure[1].exercises.is_empty());
    }

    #[test]
    fn test_serialized_sections() {
        let day = synthesize_workout_day(&DayRequest::new("Full Body", TrainingPhase::Power));
        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(value["estimated_duration"], 60);
        assert_eq!(value["phase"], "power");
        assert_eq!(value["structure"][0]["exercises"][0], "Dynamic stretching");
        assert_eq!(value["volume_parameters"]["reps"], "3-5");
    }
}
