// ABOUTME: Core data models for assessment-driven plan generation
// ABOUTME: Re-exports assessment, preference, plan, catalog, training, and evaluation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Inputs (`Assessment`, `CoachPreferences`) are read-only for the whole run.
//! Outputs (`Plan`, `EvaluationResult`) are produced once and never mutated.
//! Every model deserializes with defaults for absent fields so that
//! partially-filled payloads from coaches or the language model still load.

mod assessment;
mod evaluation;
mod exercise;
mod plan;
mod preferences;
mod training;

// Assessment domain
pub use assessment::{
    Assessment, Availability, BodyMetrics, ExerciseHistory, FitnessGoals, InjuryHistory,
    MovementScreenScores, ScreenMovement,
};

// Coach preferences
pub use preferences::CoachPreferences;

// Plan domain
pub use plan::{ExercisePrescription, Plan, PlanSource, WorkoutDay};

// Catalog domain
pub use exercise::{CatalogEntry, ExerciseRecord};

// Training vocabulary
pub use training::{
    Difficulty, ExperienceLevel, MovementPattern, PrimaryGoal, RiskLevel, TrainingPhase,
};

// Evaluation domain
pub use evaluation::{
    Criterion, CriterionResult, EvaluationResult, ExpectedCharacteristics, Scenario,
};
