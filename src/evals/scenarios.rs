// ABOUTME: Reference client scenarios used to evaluate generated plans
// ABOUTME: Embedded JSON suites (full and quick) with name-based selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachforge_core::models::Scenario;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

const SCENARIOS_JSON: &str = include_str!("scenarios.json");

/// Which group of scenarios to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenarioSuite {
    /// The five reference client scenarios
    #[default]
    Full,
    /// A single basic scenario for fast iteration
    Quick,
}

#[derive(Debug, Deserialize)]
struct ScenarioSet {
    full: Vec<Scenario>,
    quick: Vec<Scenario>,
}

fn embedded() -> AppResult<ScenarioSet> {
    Ok(serde_json::from_str(SCENARIOS_JSON)?)
}

/// Scenarios of one suite, in their fixed order
///
/// # Errors
///
/// Returns a serialization error if the embedded scenario data is malformed
pub fn load_scenarios(suite: ScenarioSuite) -> AppResult<Vec<Scenario>> {
    let set = embedded()?;
    Ok(match suite {
        ScenarioSuite::Full => set.full,
        ScenarioSuite::Quick => set.quick,
    })
}

/// Scenarios from either suite whose name contains `filter`, case-insensitive
///
/// # Errors
///
/// Returns a not-found error when no scenario matches
pub fn find_scenarios(filter: &str) -> AppResult<Vec<Scenario>> {
    let set = embedded()?;
    let needle = filter.trim().to_lowercase();
    let matches: Vec<Scenario> = set
        .full
        .into_iter()
        .chain(set.quick)
        .filter(|scenario| scenario.name.to_lowercase().contains(&needle))
        .collect();

    if matches.is_empty() {
        return Err(AppError::not_found(format!("Scenario matching '{filter}'")));
    }
    Ok(matches)
}
