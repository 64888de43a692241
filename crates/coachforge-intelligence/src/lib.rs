// ABOUTME: Deterministic fitness-domain computations behind the planning tools
// ABOUTME: Movement screen, exercise catalog, volume, day synthesis, compatibility, fallback, and evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachforge Intelligence
//!
//! Pure functions over the core data model. Nothing in this crate performs
//! I/O or calls a language model, so every result is reproducible from its
//! inputs alone.
//!
//! ## Modules
//!
//! - **`movement_screen`**: screen totals, risk level, limitations and corrective work
//! - **catalog**: built-in exercise catalog, caller-supplied catalogs, and filtered queries
//! - **volume**: weekly set targets and phase guidance
//! - **`workout_day`**: single-day session templates
//! - **compatibility**: exercise vs. limitation and injury checks
//! - **packaging**: plan normalization before persistence
//! - **fallback**: deterministic template plan
//! - **evaluation**: seven-criterion plan evaluator

/// Movement screen analysis
pub mod movement_screen;

/// Exercise catalog and queries
pub mod catalog;

/// Training volume calculation
pub mod volume;

/// Workout day synthesis
pub mod workout_day;

/// Exercise compatibility checks
pub mod compatibility;

/// Plan packaging
pub mod packaging;

/// Fallback plan synthesis
pub mod fallback;

/// Plan evaluation
pub mod evaluation;

pub use catalog::{query_exercise_catalog, ExerciseCatalog, ExerciseQuery, ExerciseQueryResult};
pub use compatibility::{check_compatibility, CompatibilityReport, CompatibilityRequest};
pub use evaluation::{PlanEvaluator, ScoringConfig};
pub use fallback::synthesize_fallback_plan;
pub use movement_screen::{analyze_movement_screen, MovementScreenAnalysis};
pub use packaging::{package_plan, PackagedPlan};
pub use volume::{calculate_volume, VolumePrescription, VolumeRequest};
pub use workout_day::{synthesize_workout_day, DayRequest, WorkoutDayTemplate};
