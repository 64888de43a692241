// ABOUTME: Training vocabulary enums shared by tools, catalog, and evaluator
// ABOUTME: Experience tiers, periodization phases, movement patterns, goals, and risk levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Defines a closed string enum with `as_str`, `ALL`, `Display` and `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// All wire values, in declaration order
            #[must_use]
            pub fn wire_values() -> Vec<&'static str> {
                Self::ALL.iter().map(|value| value.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| {
                        format!("expected one of {}", Self::wire_values().join(", "))
                    })
            }
        }
    };
}

wire_enum! {
    /// Client training experience, also used as the catalog difficulty tier
    #[derive(Default)]
    ExperienceLevel {
        /// New to structured training
        Beginner => "beginner",
        /// Consistent training history
        #[default]
        Intermediate => "intermediate",
        /// Long, high-level training history
        Advanced => "advanced",
    }
}

/// Catalog difficulty tiers share the experience vocabulary
pub type Difficulty = ExperienceLevel;

wire_enum! {
    /// Periodization block
    #[derive(Default)]
    TrainingPhase {
        /// Tissue preparation, higher reps at low intensity
        AnatomicalAdaptation => "anatomical_adaptation",
        /// Muscle growth block
        #[default]
        Hypertrophy => "hypertrophy",
        /// Maximal strength block
        Strength => "strength",
        /// Speed-strength block
        Power => "power",
        /// Recovery block at reduced volume
        Deload => "deload",
    }
}

wire_enum! {
    /// Fundamental movement pattern used to organize the exercise catalog
    MovementPattern {
        /// Knee-dominant
        Squat => "squat",
        /// Hip-dominant
        Hinge => "hinge",
        /// Pressing
        Push => "push",
        /// Rowing and pulling
        Pull => "pull",
        /// Loaded carries
        Carry => "carry",
        /// Trunk stability
        Core => "core",
        /// Range-of-motion work
        Mobility => "mobility",
        /// Energy-system work
        Cardio => "cardio",
    }
}

wire_enum! {
    /// Primary training goal accepted by the volume calculator
    PrimaryGoal {
        /// Maximal strength
        Strength => "strength",
        /// Muscle growth
        Hypertrophy => "hypertrophy",
        /// Aerobic and muscular endurance
        Endurance => "endurance",
        /// Body-fat reduction
        FatLoss => "fat_loss",
        /// Broad health and fitness
        GeneralFitness => "general_fitness",
    }
}

wire_enum! {
    /// Injury risk tier derived from the movement screen total
    RiskLevel {
        /// Total below 14
        High => "HIGH",
        /// Total 14 to 17
        Moderate => "MODERATE",
        /// Total above 17
        Low => "LOW",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Anatomical_Adaptation".parse::<TrainingPhase>(),
            Ok(TrainingPhase::AnatomicalAdaptation)
        );
        assert_eq!("CARDIO".parse::<MovementPattern>(), Ok(MovementPattern::Cardio));
    }

    #[test]
    fn test_parse_error_lists_choices() {
        let err = "olympic".parse::<ExperienceLevel>().unwrap_err();
        assert_eq!(err, "expected one of beginner, intermediate, advanced");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&PrimaryGoal::FatLoss).unwrap();
        assert_eq!(json, "\"fat_loss\"");
        let risk: RiskLevel = serde_json::from_str("\"MODERATE\"").unwrap();
        assert_eq!(risk, RiskLevel::Moderate);
    }
}
