// ABOUTME: Exercise compatibility check against screen limitations and injury history
// ABOUTME: Pattern-vs-limitation conflicts and injury-keyword overlap produce warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::movement_screen::recommendation_for_limitation;

/// Limitation fragments that conflict with each movement pattern
const PATTERN_CONFLICTS: [(&str, &[&str]); 5] = [
    ("squat", &["Squat pattern limitation", "Heavy bilateral squats"]),
    ("hinge", &["Hamstring/hip flexor limitation", "Aggressive hip hinging"]),
    ("push", &["Shoulder mobility limitation", "Overhead pressing"]),
    ("pull", &["Shoulder mobility limitation"]),
    ("core", &["Core stability limitation"]),
];

/// Exercise-name keywords that may aggravate an injured body part
const INJURY_KEYWORDS: [(&str, &[&str]); 4] = [
    ("shoulder", &["overhead", "press", "pull-up"]),
    ("knee", &["squat", "lunge", "jump"]),
    ("back", &["deadlift", "good morning", "row"]),
    ("hip", &["hinge", "squat", "lunge"]),
];

/// Inputs of a compatibility check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityRequest {
    /// Exercise to check
    pub exercise_name: String,
    /// Primary movement pattern of the exercise
    pub movement_pattern: String,
    /// Screen-identified limitations
    pub limitations: Vec<String>,
    /// Injury history
    pub injury_history: Vec<String>,
}

/// Compatibility verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// Exercise checked
    pub exercise: String,
    /// True when no conflict and no warning was found
    pub is_compatible: bool,
    /// Conflict and caution messages
    pub warnings: Vec<String>,
    /// Corrective alternatives for conflicting limitations
    pub alternatives: Vec<String>,
}

/// Check an exercise against limitations and injury history (case-insensitive)
#[must_use]
pub fn check_compatibility(request: &CompatibilityRequest) -> CompatibilityReport {
    let mut warnings = Vec::new();
    let mut alternatives: Vec<String> = Vec::new();

    let pattern = request.movement_pattern.trim().to_lowercase();
    let conflicts = PATTERN_CONFLICTS
        .iter()
        .find(|(name, _)| *name == pattern)
        .map_or(&[][..], |(_, fragments)| *fragments);

    let mut has_conflict = false;
    for limitation in &request.limitations {
        let lowered = limitation.to_lowercase();
        if conflicts
            .iter()
            .any(|fragment| lowered.contains(&fragment.to_lowercase()))
        {
            has_conflict = true;
            warnings.push(format!("Exercise conflicts with: {limitation}"));
            if let Some(alternative) = recommendation_for_limitation(limitation) {
                if !alternatives.iter().any(|known| known == alternative) {
                    alternatives.push(alternative.to_owned());
                }
            }
        }
    }

    let exercise = request.exercise_name.to_lowercase();
    for injury in &request.injury_history {
        let injury_lower = injury.to_lowercase();
        for (body_part, keywords) in &INJURY_KEYWORDS {
            if !injury_lower.contains(body_part) {
                continue;
            }
            for keyword in *keywords {
                if exercise.contains(keyword) {
                    warnings.push(format!(
                        "Caution: {} may aggravate {injury}",
                        request.exercise_name
                    ));
                }
            }
        }
    }

    CompatibilityReport {
        exercise: request.exercise_name.clone(),
        is_compatible: !has_conflict && warnings.is_empty(),
        warnings,
        alternatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_conflict_with_alternative() {
        let report = check_compatibility(&CompatibilityRequest {
            exercise_name: "Overhead Press".into(),
            movement_pattern: "push".into(),
            limitations: vec!["Shoulder mobility limitation".into()],
            injury_history: Vec::new(),
        });
        assert!(!report.is_compatible);
        assert_eq!(
            report.warnings,
            vec!["Exercise conflicts with: Shoulder mobility limitation"]
        );
        assert_eq!(
            report.alternatives,
            vec!["Landmine press, floor press, thoracic mobility"]
        );
    }

    #[test]
    fn test_injury_keywords_are_case_insensitive() {
        let report = check_compatibility(&CompatibilityRequest {
            exercise_name: "Back Squat".into(),
            movement_pattern: "squat".into(),
            limitations: Vec::new(),
            injury_history: vec!["Knee replacement 5 years ago".into()],
        });
        assert!(!report.is_compatible);
        assert_eq!(
            report.warnings,
            vec!["Caution: Back Squat may aggravate Knee replacement 5 years ago"]
        );
        assert!(report.alternatives.is_empty());
    }

    #[test]
    fn test_unrelated_limitations_are_compatible() {
        let report = check_compatibility(&CompatibilityRequest {
            exercise_name: "Dead Bug".into(),
            movement_pattern: "carry".into(),
            limitations: vec!["Core stability limitation".into()],
            injury_history: vec!["wrist sprain".into()],
        });
        assert!(report.is_compatible);
        assert!(report.warnings.is_empty());
    }
}
