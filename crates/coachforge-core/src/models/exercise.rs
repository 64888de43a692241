// ABOUTME: Exercise catalog entry and caller-supplied exercise record models
// ABOUTME: Entries are what the query tool returns; records are raw library rows to re-bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One exercise as stored in the catalog and returned by catalog queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Exercise name
    pub name: String,
    /// Required equipment; empty means none
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Short coaching cues
    #[serde(default)]
    pub cues: Vec<String>,
    /// Demonstration video link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl CatalogEntry {
    /// True when the entry needs no equipment or shares an item with `available`
    #[must_use]
    pub fn usable_with(&self, available: &[String]) -> bool {
        available.is_empty()
            || self.equipment.is_empty()
            || self.equipment.iter().any(|item| available.contains(item))
    }
}

/// A caller-supplied exercise library row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Exercise name
    #[serde(default)]
    pub name: String,
    /// Catalog bucket, usually a movement pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Required equipment
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Tags entered by the coach
    #[serde(default)]
    pub manual_tags: Vec<String>,
    /// Tags produced by automatic classification
    #[serde(default)]
    pub ai_tags: Vec<String>,
    /// Demonstration video link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
}
