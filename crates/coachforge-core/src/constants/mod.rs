// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tool wire names, planning step names, and default limits for plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Tool names form a fixed contract with the
//! language model and must not change without updating every prompt.

/// Tool identifiers exposed to the language model
pub mod tools {
    /// Movement-screen risk analysis
    pub const ANALYZE_FMS_SCORES: &str = "analyze_fms_scores";
    /// Exercise catalog lookup
    pub const QUERY_EXERCISE_LIBRARY: &str = "query_exercise_library";
    /// Weekly volume and intensity calculation
    pub const CALCULATE_TRAINING_VOLUME: &str = "calculate_training_volume";
    /// Single training day synthesis
    pub const GENERATE_WORKOUT_DAY: &str = "generate_workout_day";
    /// Exercise vs. limitation/injury compatibility check
    pub const CHECK_EXERCISE_COMPATIBILITY: &str = "check_exercise_compatibility";
    /// Final plan packaging
    pub const SAVE_WORKOUT_PLAN: &str = "save_workout_plan";

    /// All tool names in registration order
    pub const ALL: [&str; 6] = [
        ANALYZE_FMS_SCORES,
        QUERY_EXERCISE_LIBRARY,
        CALCULATE_TRAINING_VOLUME,
        GENERATE_WORKOUT_DAY,
        CHECK_EXERCISE_COMPATIBILITY,
        SAVE_WORKOUT_PLAN,
    ];
}

/// Planning pipeline step names
pub mod steps {
    /// Step 1: interpret the assessment
    pub const ANALYZE_ASSESSMENT: &str = "analyze_assessment";
    /// Step 2: choose exercises per movement pattern
    pub const SELECT_EXERCISES: &str = "select_exercises";
    /// Step 3: lay out the training week
    pub const DESIGN_WEEKLY_STRUCTURE: &str = "design_weekly_structure";
    /// Step 4: produce the full plan
    pub const GENERATE_FULL_PLAN: &str = "generate_full_plan";
    /// Step 5: safety review
    pub const REVIEW_AND_REFINE: &str = "review_and_refine";

    /// All steps in execution order
    pub const ALL: [&str; 5] = [
        ANALYZE_ASSESSMENT,
        SELECT_EXERCISES,
        DESIGN_WEEKLY_STRUCTURE,
        GENERATE_FULL_PLAN,
        REVIEW_AND_REFINE,
    ];
}

/// Movement screen limits
pub mod screen {
    /// Maximum score of a single screen movement
    pub const MAX_SUB_SCORE: u8 = 3;
    /// Maximum total across the seven movements
    pub const MAX_TOTAL_SCORE: u8 = 21;
    /// Totals below this are high risk
    pub const HIGH_RISK_BELOW: u8 = 14;
    /// Totals below this (and not high risk) are moderate risk
    pub const MODERATE_RISK_BELOW: u8 = 18;
}

/// Default values applied when inputs omit a field
pub mod defaults {
    /// Plan length in weeks
    pub const PLAN_WEEKS: u8 = 4;
    /// Training days per week
    pub const DAYS_PER_WEEK: u8 = 3;
    /// Session length in minutes
    pub const SESSION_MINUTES: u16 = 60;
    /// Iteration ceiling per planning step
    pub const MAX_STEP_ITERATIONS: u32 = 5;
    /// Plan name used by the packaging tool
    pub const SAVED_PLAN_NAME: &str = "4-Week Training Plan";
    /// Plan name used for the fallback plan
    pub const FALLBACK_PLAN_NAME: &str = "4-Week Personalized Training Plan";
    /// Coach notes attached to the fallback plan
    pub const FALLBACK_COACH_NOTES: &str =
        "Plan generated by AI coach. Review and adjust as needed based on client feedback.";
    /// RPE band assumed when a scenario does not state one
    pub const RPE_RANGE: [f64; 2] = [6.0, 8.0];
    /// Preferred training days assumed when the client lists none
    pub const PREFERRED_DAYS: [&str; 3] = ["Monday", "Wednesday", "Friday"];
}

/// Calendar helpers
pub mod calendar {
    /// Weekday names indexed 0=Sunday..6=Saturday
    pub const WEEKDAYS: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    /// Weekday index for a day name, case-insensitive
    #[must_use]
    pub fn weekday_index(name: &str) -> Option<u8> {
        WEEKDAYS
            .iter()
            .position(|day| day.eq_ignore_ascii_case(name.trim()))
            .map(|index| index as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::calendar::weekday_index;

    #[test]
    fn test_weekday_index() {
        assert_eq!(weekday_index("Sunday"), Some(0));
        assert_eq!(weekday_index("saturday"), Some(6));
        assert_eq!(weekday_index("Funday"), None);
    }
}
