// ABOUTME: Core types and constants for the Coachforge training plan platform
// ABOUTME: Foundation crate with error handling, the assessment/plan data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachforge Core
//!
//! Foundation crate providing shared types and constants for the Coachforge
//! training plan generator. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **constants**: Tool names, planning step names, and default limits
//! - **models**: Assessment, coach preferences, plans, catalog records, and evaluation results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Assessment, Plan, WorkoutDay, Scenario, EvaluationResult)
pub mod models;
