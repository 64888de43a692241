// ABOUTME: Weekly training volume and intensity calculation from fixed tables
// ABOUTME: Weekly sets by experience tier, rep/RPE/rest guidance by periodization phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroU8;

use coachforge_core::models::{ExperienceLevel, PrimaryGoal, TrainingPhase};
use serde::{Deserialize, Serialize};

/// Inputs of a volume calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeRequest {
    /// Client experience tier
    pub experience: ExperienceLevel,
    /// Periodization phase
    pub phase: TrainingPhase,
    /// Primary goal
    pub goal: PrimaryGoal,
    /// Training days per week
    pub days_per_week: NonZeroU8,
}

/// Volume and intensity guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumePrescription {
    /// Weekly working sets per muscle group
    pub weekly_sets_per_muscle: u32,
    /// Rep range per set
    pub rep_range: String,
    /// RPE band
    pub rpe_target: String,
    /// Rest between sets
    pub rest_period: String,
    /// Training days per week, echoed
    pub training_days: u8,
    /// Weekly sets divided evenly across training days (integer division)
    pub sets_per_session: u32,
}

/// Weekly sets per muscle group for an experience tier
#[must_use]
pub const fn weekly_sets(experience: ExperienceLevel) -> u32 {
    match experience {
        ExperienceLevel::Beginner => 10,
        ExperienceLevel::Intermediate => 15,
        ExperienceLevel::Advanced => 20,
    }
}

/// Rep range, RPE band and rest guidance for a phase
#[must_use]
pub const fn phase_guidance(phase: TrainingPhase) -> (&'static str, &'static str, &'static str) {
    match phase {
        TrainingPhase::AnatomicalAdaptation => ("12-15", "6-7", "60-90 seconds"),
        TrainingPhase::Hypertrophy => ("8-12", "7-8", "60-120 seconds"),
        TrainingPhase::Strength => ("4-6", "8-9", "2-4 minutes"),
        TrainingPhase::Power => ("3-5", "7-8 (speed focus)", "2-5 minutes"),
        TrainingPhase::Deload => ("8-12 (50% volume)", "5-6", "as needed"),
    }
}

/// Calculate volume and intensity targets
///
/// The goal does not currently change the tables; it is accepted so
/// callers state it explicitly.
#[must_use]
pub fn calculate_volume(request: &VolumeRequest) -> VolumePrescription {
    let weekly_sets_per_muscle = weekly_sets(request.experience);
    let (rep_range, rpe_target, rest_period) = phase_guidance(request.phase);
    let days = request.days_per_week.get();

    VolumePrescription {
        weekly_sets_per_muscle,
        rep_range: rep_range.to_owned(),
        rpe_target: rpe_target.to_owned(),
        rest_period: rest_period.to_owned(),
        training_days: days,
        sets_per_session: weekly_sets_per_muscle / u32::from(days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(experience: ExperienceLevel, phase: TrainingPhase, days: u8) -> VolumeRequest {
        VolumeRequest {
            experience,
            phase,
            goal: PrimaryGoal::GeneralFitness,
            days_per_week: NonZeroU8::new(days).unwrap(),
        }
    }

    #[test]
    fn test_sets_per_session_is_integer_division() {
        for experience in ExperienceLevel::ALL {
            for days in 1..=7 {
                let result = calculate_volume(&request(*experience, TrainingPhase::Hypertrophy, days));
                assert_eq!(
                    result.sets_per_session,
                    result.weekly_sets_per_muscle / u32::from(days)
                );
                assert_eq!(result.training_days, days);
            }
        }
    }

    #[test]
    fn test_phase_tables() {
        let strength = calculate_volume(&request(ExperienceLevel::Advanced, TrainingPhase::Strength, 4));
        assert_eq!(strength.weekly_sets_per_muscle, 20);
        assert_eq!(strength.sets_per_session, 5);
        assert_eq!(strength.rep_range, "4-6");
        assert_eq!(strength.rest_period, "2-4 minutes");

        let deload = calculate_volume(&request(ExperienceLevel::Beginner, TrainingPhase::Deload, 3));
        assert_eq!(deload.sets_per_session, 3);
        assert_eq!(deload.rep_range, "8-12 (50% volume)");
        assert_eq!(deload.rpe_target, "5-6");
    }
}
