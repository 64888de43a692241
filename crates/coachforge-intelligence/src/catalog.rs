// ABOUTME: Exercise catalog keyed by movement pattern and difficulty tier
// ABOUTME: Built-in library, re-bucketing of caller-supplied records, and equipment-aware queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Catalog
//!
//! The catalog is an immutable value. A run either shares the built-in
//! catalog or owns one re-bucketed from caller-supplied exercise records;
//! there is no process-wide mutable library.

use std::collections::BTreeMap;

use coachforge_core::models::{
    CatalogEntry, Difficulty, ExerciseRecord, MovementPattern,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bucket used for records without a category
const DEFAULT_CATEGORY: &str = "strength";

/// Number of description sentences kept as cues
const MAX_DERIVED_CUES: usize = 3;

struct Seed {
    name: &'static str,
    equipment: &'static [&'static str],
    cues: &'static [&'static str],
}

const fn seed(
    name: &'static str,
    equipment: &'static [&'static str],
    cues: &'static [&'static str],
) -> Seed {
    Seed {
        name,
        equipment,
        cues,
    }
}

type TierSeeds = [&'static [Seed]; 3];

const SQUAT: TierSeeds = [
    &[
        seed("Goblet Squat", &["dumbbell", "kettlebell"], &["chest up", "knees track toes", "sit back"]),
        seed("Box Squat", &["box", "bench"], &["control descent", "pause on box", "drive through heels"]),
        seed("Bodyweight Squat", &[], &["arms forward for balance", "full depth if able"]),
        seed("Wall Squat Hold", &[], &["back flat against wall", "thighs parallel"]),
    ],
    &[
        seed("Front Squat", &["barbell"], &["elbows high", "upright torso", "full depth"]),
        seed("Bulgarian Split Squat", &["dumbbells", "bench"], &["90/90 position", "vertical shin"]),
        seed("Leg Press", &["machine"], &["lower back stays on pad", "full range"]),
    ],
    &[
        seed("Back Squat", &["barbell", "rack"], &["brace core", "break at hips and knees", "drive up"]),
        seed("Pause Squat", &["barbell"], &["3 second pause at bottom", "no bounce"]),
        seed("Pistol Squat", &[], &["counterbalance with arms", "control descent"]),
    ],
];

const HINGE: TierSeeds = [
    &[
        seed("Hip Hinge with Dowel", &["dowel"], &["dowel contacts head, back, tailbone", "push hips back"]),
        seed("Romanian Deadlift (Light)", &["dumbbells"], &["soft knees", "hips back", "feel hamstring stretch"]),
        seed("Glute Bridge", &[], &["squeeze glutes at top", "don't hyperextend back"]),
        seed("Hip Thrust", &["bench"], &["chin tucked", "drive through heels"]),
    ],
    &[
        seed("Romanian Deadlift", &["barbell"], &["bar close to legs", "hinge at hips", "neutral spine"]),
        seed("Single-Leg Romanian Deadlift", &["dumbbell"], &["hinge pattern", "balance challenge"]),
        seed("Kettlebell Swing", &["kettlebell"], &["hip snap", "arms are ropes", "don't squat"]),
    ],
    &[
        seed("Conventional Deadlift", &["barbell"], &["wedge into bar", "leg drive then hip extension"]),
        seed("Trap Bar Deadlift", &["trap bar"], &["handles at sides", "push floor away"]),
        seed("Good Morning", &["barbell"], &["bar on back", "hinge pattern", "feel hamstrings"]),
    ],
];

const PUSH: TierSeeds = [
    &[
        seed("Wall Push-Up", &[], &["body straight", "control movement"]),
        seed("Incline Push-Up", &["bench"], &["hands on bench", "full range"]),
        seed("Dumbbell Floor Press", &["dumbbells"], &["elbows at 45 degrees", "pause at bottom"]),
        seed("Landmine Press", &["barbell", "landmine"], &["shoulder-friendly", "one arm at a time"]),
    ],
    &[
        seed("Push-Up", &[], &["body straight", "chest to floor", "full lockout"]),
        seed("Dumbbell Bench Press", &["dumbbells", "bench"], &["retract scapulae", "controlled descent"]),
        seed("Dumbbell Shoulder Press", &["dumbbells"], &["neutral grip option", "core braced"]),
    ],
    &[
        seed("Barbell Bench Press", &["barbell", "bench", "rack"], &["leg drive", "arch back", "touch chest"]),
        seed("Overhead Press", &["barbell"], &["squeeze glutes", "head through at top"]),
        seed("Dips", &["dip bars"], &["lean forward for chest", "upright for triceps"]),
    ],
];

const PULL: TierSeeds = [
    &[
        seed("Face Pull", &["cable", "band"], &["pull to face", "external rotation at end"]),
        seed("Band Pull-Apart", &["band"], &["squeeze shoulder blades", "arms straight"]),
        seed("Seated Cable Row", &["cable"], &["chest up", "pull to sternum"]),
        seed("Lat Pulldown", &["cable"], &["lean back slightly", "pull to chest"]),
    ],
    &[
        seed("Dumbbell Row", &["dumbbell", "bench"], &["pull to hip", "no rotation"]),
        seed("Inverted Row", &["bar", "TRX"], &["body straight", "pull chest to bar"]),
        seed("Cable Row", &["cable"], &["squeeze at end", "controlled return"]),
    ],
    &[
        seed("Barbell Row", &["barbell"], &["hip hinge position", "pull to lower chest"]),
        seed("Pull-Up", &["pull-up bar"], &["dead hang start", "chin over bar"]),
        seed("Weighted Pull-Up", &["pull-up bar", "weight belt"], &["control the weight"]),
    ],
];

const CARRY: TierSeeds = [
    &[
        seed("Farmer's Carry", &["dumbbells", "kettlebells"], &["tall posture", "shoulders back", "controlled steps"]),
        seed("Suitcase Carry", &["dumbbell"], &["one side", "resist lateral flexion"]),
    ],
    &[
        seed("Goblet Carry", &["kettlebell", "dumbbell"], &["front loaded", "upright posture"]),
        seed("Overhead Carry", &["kettlebell"], &["arm locked out", "core braced"]),
    ],
    &[
        seed("Heavy Farmer's Carry", &["trap bar", "farmer handles"], &["grip strength challenge"]),
        seed("Yoke Walk", &["yoke"], &["small steps", "brace hard"]),
    ],
];

const CORE: TierSeeds = [
    &[
        seed("Dead Bug", &[], &["low back pressed down", "opposite arm/leg", "breathe out on extension"]),
        seed("Bird Dog", &[], &["neutral spine", "opposite arm/leg", "don't rotate"]),
        seed("Plank", &[], &["straight line", "squeeze everything", "breathe"]),
        seed("Side Plank", &[], &["stack hips", "straight line", "don't sag"]),
    ],
    &[
        seed("Pallof Press", &["cable", "band"], &["resist rotation", "press and hold"]),
        seed("Ab Wheel Rollout", &["ab wheel"], &["hips forward", "control the descent"]),
        seed("Hanging Knee Raise", &["pull-up bar"], &["no swinging", "curl pelvis up"]),
    ],
    &[
        seed("Hanging Leg Raise", &["pull-up bar"], &["straight legs", "control descent"]),
        seed("Dragon Flag", &["bench"], &["straight body", "lower slowly"]),
        seed("L-Sit", &["parallettes", "dip bars"], &["legs straight", "push down hard"]),
    ],
];

const CARDIO: TierSeeds = [
    &[
        seed("Walking", &[], &["Zone 2 heart rate", "nasal breathing if possible"]),
        seed("Stationary Bike", &["bike"], &["comfortable resistance", "steady pace"]),
    ],
    &[
        seed("Rowing", &["rower"], &["legs-back-arms", "steady state"]),
        seed("Running", &[], &["conversational pace for Zone 2"]),
        seed("Stair Climber", &["stair machine"], &["don't lean on rails"]),
    ],
    &[
        seed("Interval Sprints", &[], &["work:rest ratio", "full recovery between"]),
        seed("Assault Bike Intervals", &["assault bike"], &["all out effort", "complete rest"]),
    ],
];

const MOBILITY: TierSeeds = [
    &[
        seed("Cat-Cow", &[], &["breathe with movement", "full range"]),
        seed("World's Greatest Stretch", &[], &["lunge, rotate, reach"]),
        seed("90/90 Hip Stretch", &[], &["sit tall", "feel stretch in both hips"]),
        seed("Wall Ankle Stretch", &[], &["knee to wall", "heel down"]),
    ],
    &[
        seed("Foam Rolling", &["foam roller"], &["slow passes", "pause on tender spots"]),
        seed("Banded Hip Distraction", &["band"], &["band in hip crease", "rock back and forth"]),
        seed("Thoracic Rotation", &[], &["hand behind head", "rotate to ceiling"]),
    ],
    &[
        seed("Jefferson Curl", &["light weight"], &["very slow", "segment by segment"]),
        seed("Loaded Progressive Stretch", &[], &["use load to deepen stretch"]),
    ],
];

const fn builtin_seeds(pattern: MovementPattern) -> &'static TierSeeds {
    match pattern {
        MovementPattern::Squat => &SQUAT,
        MovementPattern::Hinge => &HINGE,
        MovementPattern::Push => &PUSH,
        MovementPattern::Pull => &PULL,
        MovementPattern::Carry => &CARRY,
        MovementPattern::Core => &CORE,
        MovementPattern::Mobility => &MOBILITY,
        MovementPattern::Cardio => &CARDIO,
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Immutable exercise library: `{pattern: {difficulty: [entries]}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    buckets: BTreeMap<String, BTreeMap<Difficulty, Vec<CatalogEntry>>>,
}

impl ExerciseCatalog {
    /// The built-in library covering all eight movement patterns
    #[must_use]
    pub fn builtin() -> Self {
        let buckets = MovementPattern::ALL
            .iter()
            .map(|pattern| {
                let tiers = Difficulty::ALL
                    .iter()
                    .zip(builtin_seeds(*pattern))
                    .map(|(difficulty, seeds)| {
                        let entries = seeds
                            .iter()
                            .map(|seed| CatalogEntry {
                                name: seed.name.to_owned(),
                                equipment: to_strings(seed.equipment),
                                cues: to_strings(seed.cues),
                                video_url: None,
                            })
                            .collect();
                        (*difficulty, entries)
                    })
                    .collect();
                (pattern.as_str().to_owned(), tiers)
            })
            .collect();
        Self { buckets }
    }

    /// Re-bucket caller-supplied records by category and tag-inferred difficulty
    ///
    /// Records without a category land in `strength`. Difficulty is
    /// `beginner` if any tag mentions it, else `advanced` if any tag mentions
    /// that, else `intermediate`. Cues are the first three sentences of the
    /// description.
    #[must_use]
    pub fn from_records(records: &[ExerciseRecord]) -> Self {
        let mut buckets: BTreeMap<String, BTreeMap<Difficulty, Vec<CatalogEntry>>> =
            BTreeMap::new();

        for record in records {
            let category = record
                .category
                .clone()
                .filter(|category| !category.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());

            let tiers = buckets.entry(category).or_insert_with(|| {
                Difficulty::ALL
                    .iter()
                    .map(|difficulty| (*difficulty, Vec::new()))
                    .collect()
            });

            tiers
                .entry(infer_difficulty(record))
                .or_default()
                .push(CatalogEntry {
                    name: record.name.clone(),
                    equipment: record.equipment.clone(),
                    cues: derive_cues(&record.description),
                    video_url: record.youtube_url.clone(),
                });
        }

        let catalog = Self { buckets };
        debug!(
            records = records.len(),
            categories = ?catalog.categories().collect::<Vec<_>>(),
            "Re-bucketed custom exercise records"
        );
        catalog
    }

    /// Entries stored under a pattern and difficulty (unfiltered)
    #[must_use]
    pub fn entries(&self, pattern: &str, difficulty: Difficulty) -> &[CatalogEntry] {
        self.buckets
            .get(pattern)
            .and_then(|tiers| tiers.get(&difficulty))
            .map_or(&[], Vec::as_slice)
    }

    /// Category keys present in the catalog
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Total number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    /// True when the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn infer_difficulty(record: &ExerciseRecord) -> Difficulty {
    let tags: Vec<String> = record
        .manual_tags
        .iter()
        .chain(&record.ai_tags)
        .map(|tag| tag.to_lowercase())
        .collect();

    if tags.iter().any(|tag| tag.contains("beginner")) {
        Difficulty::Beginner
    } else if tags.iter().any(|tag| tag.contains("advanced")) {
        Difficulty::Advanced
    } else {
        Difficulty::Intermediate
    }
}

fn derive_cues(description: &str) -> Vec<String> {
    if description.is_empty() {
        return Vec::new();
    }
    description
        .split(". ")
        .take(MAX_DERIVED_CUES)
        .map(str::to_owned)
        .collect()
}

/// Parameters of a catalog query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseQuery {
    /// Pattern to search
    pub movement_pattern: MovementPattern,
    /// Difficulty tier
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Available equipment; empty disables equipment filtering
    #[serde(default)]
    pub equipment_available: Vec<String>,
    /// Name fragments to exclude, case-insensitive
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl ExerciseQuery {
    /// Query a pattern at the default difficulty with no filters
    #[must_use]
    pub fn new(movement_pattern: MovementPattern) -> Self {
        Self {
            movement_pattern,
            difficulty: Difficulty::default(),
            equipment_available: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Query result, echoing the search parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseQueryResult {
    /// Pattern searched
    pub movement_pattern: MovementPattern,
    /// Difficulty searched
    pub difficulty: Difficulty,
    /// Matching entries in catalog order
    pub exercises: Vec<CatalogEntry>,
    /// Number of matching entries
    pub count: usize,
}

/// Look up catalog entries for a pattern and difficulty
///
/// With a non-empty equipment list only entries needing no equipment or
/// sharing an item with the list are returned.
#[must_use]
pub fn query_exercise_catalog(catalog: &ExerciseCatalog, query: &ExerciseQuery) -> ExerciseQueryResult {
    let exclusions: Vec<String> = query
        .exclude_patterns
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect();

    let exercises: Vec<CatalogEntry> = catalog
        .entries(query.movement_pattern.as_str(), query.difficulty)
        .iter()
        .filter(|entry| entry.usable_with(&query.equipment_available))
        .filter(|entry| {
            let name = entry.name.to_lowercase();
            !exclusions.iter().any(|term| name.contains(term))
        })
        .cloned()
        .collect();

    ExerciseQueryResult {
        movement_pattern: query.movement_pattern,
        difficulty: query.difficulty,
        count: exercises.len(),
        exercises,
    }
}
