// ABOUTME: System and step instructions for the planning conversation loaded at compile time
// ABOUTME: Builds the system prompt with an optional coach philosophy and fills step templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning Prompts
//!
//! Prompts are markdown files embedded at compile time so they can be
//! edited without touching code.

use coachforge_core::constants::steps;

/// Coaching system instruction shared by every step
pub const PLANNER_SYSTEM_PROMPT: &str = include_str!("planner_system.md");

const ANALYZE_ASSESSMENT: &str = include_str!("step_analyze_assessment.md");
const SELECT_EXERCISES: &str = include_str!("step_select_exercises.md");
const DESIGN_WEEKLY_STRUCTURE: &str = include_str!("step_design_weekly_structure.md");
const GENERATE_FULL_PLAN: &str = include_str!("step_generate_full_plan.md");
const REVIEW_AND_REFINE: &str = include_str!("step_review_and_refine.md");

/// Build the system instruction, appending the coach's own philosophy when given
#[must_use]
pub fn system_prompt(coach_philosophy: Option<&str>) -> String {
    match coach_philosophy.map(str::trim).filter(|text| !text.is_empty()) {
        Some(philosophy) => format!(
            "{PLANNER_SYSTEM_PROMPT}\n## Coach Philosophy\n\n\
             This coach's own principles take part in every programming decision:\n\n{philosophy}\n"
        ),
        None => PLANNER_SYSTEM_PROMPT.to_owned(),
    }
}

/// Instruction template for a named step
#[must_use]
pub fn step_template(step: &str) -> Option<&'static str> {
    match step {
        steps::ANALYZE_ASSESSMENT => Some(ANALYZE_ASSESSMENT),
        steps::SELECT_EXERCISES => Some(SELECT_EXERCISES),
        steps::DESIGN_WEEKLY_STRUCTURE => Some(DESIGN_WEEKLY_STRUCTURE),
        steps::GENERATE_FULL_PLAN => Some(GENERATE_FULL_PLAN),
        steps::REVIEW_AND_REFINE => Some(REVIEW_AND_REFINE),
        _ => None,
    }
}

/// Weekly structure instruction with the client's schedule filled in
#[must_use]
pub fn weekly_structure_prompt(days_per_week: u8, minutes_per_session: u16) -> String {
    DESIGN_WEEKLY_STRUCTURE
        .replace("{days_per_week}", &days_per_week.to_string())
        .replace("{minutes_per_session}", &minutes_per_session.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_philosophy_is_appended() {
        let prompt = system_prompt(Some("Kettlebells first."));
        assert!(prompt.starts_with(PLANNER_SYSTEM_PROMPT));
        assert!(prompt.ends_with("Kettlebells first.\n"));
        assert_eq!(system_prompt(Some("   ")), PLANNER_SYSTEM_PROMPT);
    }

    #[test]
    fn test_every_step_has_a_template() {
        for step in steps::ALL {
            assert!(step_template(step).is_some(), "missing template for {step}");
        }
        assert!(step_template("warm_up").is_none());
    }

    #[test]
    fn test_schedule_interpolation() {
        let prompt = weekly_structure_prompt(4, 45);
        assert!(prompt.contains("Train 4 days per week"));
        assert!(prompt.contains("about 45 minutes"));
        assert!(!prompt.contains('{'));
    }
}
