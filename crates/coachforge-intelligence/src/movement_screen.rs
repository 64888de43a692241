// ABOUTME: Movement screen analysis producing risk tier, limitations, and contraindications
// ABOUTME: Each sub-score below 3 contributes a fixed limitation/contraindication/recommendation triple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachforge_core::constants::screen::{
    HIGH_RISK_BELOW, MAX_SUB_SCORE, MAX_TOTAL_SCORE, MODERATE_RISK_BELOW,
};
use coachforge_core::models::{MovementScreenScores, RiskLevel, ScreenMovement};
use serde::{Deserialize, Serialize};

/// Fixed consequences of a compensated or failed screen movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenFinding {
    /// Movement that produced the finding
    pub movement: ScreenMovement,
    /// Limitation label
    pub limitation: &'static str,
    /// Exercises to avoid
    pub contraindication: &'static str,
    /// Corrective alternatives
    pub recommendation: &'static str,
}

/// Findings in screen order
pub const SCREEN_FINDINGS: [ScreenFinding; 7] = [
    ScreenFinding {
        movement: ScreenMovement::DeepSquat,
        limitation: "Squat pattern limitation",
        contraindication: "Heavy bilateral squats",
        recommendation: "Goblet squats, box squats, hip/ankle mobility work",
    },
    ScreenFinding {
        movement: ScreenMovement::HurdleStep,
        limitation: "Single-leg stance limitation",
        contraindication: "Advanced single-leg exercises",
        recommendation: "Progress single-leg work gradually",
    },
    ScreenFinding {
        movement: ScreenMovement::InlineLunge,
        limitation: "Lunge pattern limitation",
        contraindication: "Walking lunges, dynamic lunges",
        recommendation: "Static split squats before dynamic lunges",
    },
    ScreenFinding {
        movement: ScreenMovement::ShoulderMobility,
        limitation: "Shoulder mobility limitation",
        contraindication: "Overhead pressing, behind-neck movements",
        recommendation: "Landmine press, floor press, thoracic mobility",
    },
    ScreenFinding {
        movement: ScreenMovement::ActiveStraightLegRaise,
        limitation: "Hamstring/hip flexor limitation",
        contraindication: "Aggressive hip hinging",
        recommendation: "RDLs with limited range, active flexibility work",
    },
    ScreenFinding {
        movement: ScreenMovement::TrunkStabilityPushup,
        limitation: "Core stability limitation",
        contraindication: "Heavy compound lifts without core prep",
        recommendation: "Dead bugs, planks, anti-extension work",
    },
    ScreenFinding {
        movement: ScreenMovement::RotaryStability,
        limitation: "Rotational stability limitation",
        contraindication: "Rotational power exercises",
        recommendation: "Pallof press, bird dogs, anti-rotation work",
    },
];

/// Corrective recommendation attached to a limitation label, case-insensitive
#[must_use]
pub fn recommendation_for_limitation(limitation: &str) -> Option<&'static str> {
    let wanted = limitation.trim().to_lowercase();
    SCREEN_FINDINGS
        .iter()
        .find(|finding| finding.limitation.to_lowercase() == wanted)
        .map(|finding| finding.recommendation)
}

/// Result of analyzing a movement screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementScreenAnalysis {
    /// Sum of the seven sub-scores
    pub total_score: u8,
    /// Maximum attainable total
    pub max_score: u8,
    /// Risk tier
    pub risk_level: RiskLevel,
    /// Guidance for the tier
    pub risk_note: String,
    /// Limitations in screen order
    pub limitations: Vec<String>,
    /// Contraindicated exercise families
    pub contraindications: Vec<String>,
    /// Corrective recommendations
    pub recommendations: Vec<String>,
    /// Injury history, echoed
    pub injury_considerations: Vec<String>,
}

/// Risk tier and note for a screen total
#[must_use]
pub const fn risk_for_total(total: u8) -> (RiskLevel, &'static str) {
    if total < HIGH_RISK_BELOW {
        (
            RiskLevel::High,
            "Focus on corrective exercise before progressing load",
        )
    } else if total < MODERATE_RISK_BELOW {
        (
            RiskLevel::Moderate,
            "Address limitations while training, monitor closely",
        )
    } else {
        (
            RiskLevel::Low,
            "Can pursue more aggressive training progression",
        )
    }
}

/// Analyze movement screen scores against the fixed finding table
#[must_use]
pub fn analyze_movement_screen(
    scores: &MovementScreenScores,
    injury_history: &[String],
) -> MovementScreenAnalysis {
    let total_score = scores.total();
    let (risk_level, risk_note) = risk_for_total(total_score);

    let findings: Vec<&ScreenFinding> = SCREEN_FINDINGS
        .iter()
        .filter(|finding| scores.score(finding.movement) < MAX_SUB_SCORE)
        .collect();

    MovementScreenAnalysis {
        total_score,
        max_score: MAX_TOTAL_SCORE,
        risk_level,
        risk_note: risk_note.to_owned(),
        limitations: findings
            .iter()
            .map(|finding| finding.limitation.to_owned())
            .collect(),
        contraindications: findings
            .iter()
            .map(|finding| finding.contraindication.to_owned())
            .collect(),
        recommendations: findings
            .iter()
            .map(|finding| finding.recommendation.to_owned())
            .collect(),
        injury_considerations: injury_history.to_vec(),
    }
}
