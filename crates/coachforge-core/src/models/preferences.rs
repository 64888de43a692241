// ABOUTME: Coach preference model supplied alongside each assessment
// ABOUTME: Plan length, periodization style, intensity preference, and focus areas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::defaults::PLAN_WEEKS;

/// How the coach wants the plan shaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachPreferences {
    /// Focus areas in priority order
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Plan length in weeks
    #[serde(default = "default_weeks")]
    pub plan_duration_weeks: u8,
    /// Periodization style (linear, undulating, block)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodization_style: Option<String>,
    /// Intensity preference (conservative, moderate, aggressive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_preference: Option<String>,
}

const fn default_weeks() -> u8 {
    PLAN_WEEKS
}

impl Default for CoachPreferences {
    fn default() -> Self {
        Self {
            focus_areas: Vec::new(),
            plan_duration_weeks: PLAN_WEEKS,
            periodization_style: None,
            intensity_preference: None,
        }
    }
}
