// ABOUTME: Defines ToolExecutionContext which provides tools with the run's exercise catalog.
// ABOUTME: The catalog is injected per run instead of living in process-wide state.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context
//!
//! Resources handed to every tool execution. The built-in catalog is
//! read-only and may be shared across runs; a caller-supplied catalog
//! belongs to the run that built it.

use std::sync::Arc;

use coachforge_intelligence::catalog::ExerciseCatalog;

/// Context provided to every tool execution
#[derive(Debug, Clone)]
pub struct ToolExecutionContext {
    catalog: Arc<ExerciseCatalog>,
}

impl ToolExecutionContext {
    /// Create a context over a catalog
    #[must_use]
    pub const fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self { catalog }
    }

    /// Context over the built-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Arc::new(ExerciseCatalog::builtin()))
    }

    /// Exercise catalog for this run
    #[must_use]
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }
}
