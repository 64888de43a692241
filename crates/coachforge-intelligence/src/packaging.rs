// ABOUTME: Plan packaging that normalizes a finished plan for persistence
// ABOUTME: Applies defaults for name, week count, and notes without further validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachforge_core::constants::defaults::{PLAN_WEEKS, SAVED_PLAN_NAME};
use coachforge_core::models::{Plan, WorkoutDay};
use serde::{Deserialize, Serialize};

/// Status reported for a packaged plan
pub const READY_TO_SAVE: &str = "ready_to_save";

/// Packaged plan handed back to the caller for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagedPlan {
    /// Always `ready_to_save`
    pub status: String,
    /// Normalized plan
    pub plan: Plan,
}

/// Normalize plan fields, defaulting anything absent
#[must_use]
pub fn package_plan(
    name: Option<String>,
    weeks: Option<u8>,
    workout_days: Vec<WorkoutDay>,
    coach_notes: Option<String>,
) -> PackagedPlan {
    PackagedPlan {
        status: READY_TO_SAVE.to_owned(),
        plan: Plan {
            name: name.unwrap_or_else(|| SAVED_PLAN_NAME.to_owned()),
            weeks: weeks.unwrap_or(PLAN_WEEKS),
            workout_days,
            coach_notes: coach_notes.unwrap_or_default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let packaged = package_plan(None, None, Vec::new(), None);
        assert_eq!(packaged.status, "ready_to_save");
        assert_eq!(packaged.plan.name, "4-Week Training Plan");
        assert_eq!(packaged.plan.weeks, 4);
        assert_eq!(packaged.plan.coach_notes, "");
    }

    #[test]
    fn test_values_echoed() {
        let packaged = package_plan(Some("Block A".into()), Some(6), Vec::new(), Some("Go".into()));
        assert_eq!(packaged.plan.name, "Block A");
        assert_eq!(packaged.plan.weeks, 6);
        assert_eq!(packaged.plan.coach_notes, "Go");
    }
}
