// ABOUTME: Plan quality evaluation against reference client scenarios
// ABOUTME: Embedded scenario suites and the sequential evaluation harness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Sequential scenario runner and summary
pub mod harness;
/// Embedded reference scenarios
pub mod scenarios;

pub use harness::{EvaluationHarness, EvaluationSummary, ScenarioReport};
pub use scenarios::{find_scenarios, load_scenarios, ScenarioSuite};
