// ABOUTME: Deterministic template plan used when no plan was packaged during a run
// ABOUTME: Four weeks of phase-parameterized days rotated through a fixed focus cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fallback Plan Synthesis
//!
//! Guarantees a structurally valid plan even when every model call failed.
//! The output depends only on the assessment's availability section.

use coachforge_core::constants::calendar::weekday_index;
use coachforge_core::constants::defaults::{
    DAYS_PER_WEEK, FALLBACK_COACH_NOTES, FALLBACK_PLAN_NAME, PLAN_WEEKS, PREFERRED_DAYS,
};
use coachforge_core::models::{Assessment, ExercisePrescription, Plan, TrainingPhase, WorkoutDay};

/// Most days a single week can hold
const MAX_DAYS_PER_WEEK: u8 = 7;

/// Focus categories in rotation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCategory {
    /// Upper-body strength
    UpperBody,
    /// Lower-body strength
    LowerBody,
    /// Full-body strength
    FullBody,
    /// Low-intensity conditioning
    Cardio,
}

impl FocusCategory {
    /// Rotation applied by day index within a week
    pub const ROTATION: [Self; 4] = [Self::UpperBody, Self::LowerBody, Self::FullBody, Self::Cardio];

    /// Focus label written to the workout day
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpperBody => "Upper Body",
            Self::LowerBody => "Lower Body",
            Self::FullBody => "Full Body",
            Self::Cardio => "Cardio/Active Recovery",
        }
    }

    /// Category for the nth day of a week
    #[must_use]
    pub const fn for_day(day: usize) -> Self {
        Self::ROTATION[day % Self::ROTATION.len()]
    }
}

/// Phase assigned to a plan week
#[must_use]
pub const fn phase_for_week(week: u32) -> TrainingPhase {
    match week {
        0..=2 => TrainingPhase::AnatomicalAdaptation,
        3 => TrainingPhase::Hypertrophy,
        _ => TrainingPhase::Strength,
    }
}

struct TemplateParams {
    sets: u32,
    reps: &'static str,
    rpe: f64,
    rest_seconds: u32,
}

const fn template_params(phase: TrainingPhase) -> TemplateParams {
    match phase {
        TrainingPhase::AnatomicalAdaptation => TemplateParams {
            sets: 3,
            reps: "12-15",
            rpe: 6.0,
            rest_seconds: 60,
        },
        TrainingPhase::Strength => TemplateParams {
            sets: 4,
            reps: "5-8",
            rpe: 8.0,
            rest_seconds: 120,
        },
        TrainingPhase::Hypertrophy | TrainingPhase::Power | TrainingPhase::Deload => {
            TemplateParams {
                sets: 4,
                reps: "8-12",
                rpe: 7.0,
                rest_seconds: 90,
            }
        }
    }
}

/// Template exercises for a focus category in a phase
#[must_use]
pub fn template_exercises(focus: FocusCategory, phase: TrainingPhase) -> Vec<ExercisePrescription> {
    let p = template_params(phase);
    match focus {
        FocusCategory::UpperBody => vec![
            ExercisePrescription::strength("Push-Up or Bench Press", p.sets, p.reps, p.rest_seconds, p.rpe),
            ExercisePrescription::strength("Dumbbell Row", p.sets, p.reps, p.rest_seconds, p.rpe),
            ExercisePrescription::strength("Shoulder Press", 3, p.reps, 60, p.rpe),
            ExercisePrescription::strength("Face Pull", 3, "12-15", 45, 6.0),
        ],
        FocusCategory::LowerBody => vec![
            ExercisePrescription::strength("Squat Variation", p.sets, p.reps, p.rest_seconds, p.rpe),
            ExercisePrescription::strength("Romanian Deadlift", p.sets, p.reps, p.rest_seconds, p.rpe),
            ExercisePrescription::strength("Split Squat", 3, "10-12 each", 60, p.rpe),
            ExercisePrescription::strength("Glute Bridge", 3, "12-15", 45, 6.0),
        ],
        FocusCategory::FullBody => vec![
            ExercisePrescription::strength("Goblet Squat", p.sets, p.reps, p.rest_seconds, p.rpe),
            ExercisePrescription::strength("Push-Up", 3, p.reps, 60, p.rpe),
            ExercisePrescription::strength("Dumbbell Row", 3, p.reps, 60, p.rpe),
            ExercisePrescription::strength("Plank", 3, "30-45 sec", 45, 6.0),
        ],
        FocusCategory::Cardio => vec![ExercisePrescription::timed(
            "Zone 2 Cardio",
            30,
            130,
            "Conversational pace",
        )],
    }
}

/// Training days per week used by the fallback: absent or zero becomes 3, capped at 7
#[must_use]
pub fn fallback_days_per_week(assessment: &Assessment) -> u8 {
    match assessment.availability.days_per_week {
        None | Some(0) => DAYS_PER_WEEK,
        Some(days) => days.min(MAX_DAYS_PER_WEEK),
    }
}

/// Synthesize the deterministic four-week template plan
#[must_use]
pub fn synthesize_fallback_plan(assessment: &Assessment) -> Plan {
    let days_per_week = usize::from(fallback_days_per_week(assessment));
    let preferred: Vec<&str> = if assessment.availability.preferred_days.is_empty() {
        PREFERRED_DAYS.to_vec()
    } else {
        assessment
            .availability
            .preferred_days
            .iter()
            .map(String::as_str)
            .collect()
    };

    let mut workout_days = Vec::with_capacity(usize::from(PLAN_WEEKS) * days_per_week);
    for week in 1..=u32::from(PLAN_WEEKS) {
        let phase = phase_for_week(week);
        for day in 0..days_per_week {
            let day_name = preferred[day % preferred.len()];
            let day_of_week = weekday_index(day_name).unwrap_or(((day + 1) % 7) as u8);
            let focus = FocusCategory::for_day(day);

            workout_days.push(WorkoutDay {
                week_number: week,
                day_of_week,
                name: format!("Week {week} - {day_name}"),
                focus: focus.label().to_owned(),
                exercises: template_exercises(focus, phase),
                notes: format!("Phase: {phase}. Focus on movement quality."),
            });
        }
    }

    Plan {
        name: FALLBACK_PLAN_NAME.to_owned(),
        weeks: PLAN_WEEKS,
        workout_days,
        coach_notes: FALLBACK_COACH_NOTES.to_owned(),
    }
}
