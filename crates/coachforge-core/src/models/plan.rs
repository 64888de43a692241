// ABOUTME: Training plan model produced by the planning pipeline
// ABOUTME: Plan, WorkoutDay, and ExercisePrescription with lenient deserialization of model output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::defaults::{PLAN_WEEKS, SAVED_PLAN_NAME};

/// One exercise slot inside a workout day
///
/// Either the strength fields (sets, reps, rest, RPE) or the conditioning
/// fields (duration, heart rate) are populated; rarely both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPrescription")]
pub struct ExercisePrescription {
    /// Exercise name
    pub exercise_name: String,
    /// Working sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Reps per set, free text such as `8-12` or `30-45 sec`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Rest between sets in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Target rate of perceived exertion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    /// Duration for timed work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Target heart rate for conditioning work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_hr: Option<u32>,
    /// Coaching notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Wire shape of a prescription as models write it
///
/// `generate_workout_day` emits `name` while saved plans use `exercise_name`,
/// and models often send both; `exercise_name` wins when present.
#[derive(Deserialize)]
struct RawPrescription {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    exercise_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    sets: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    reps: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    rest_seconds: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    rpe: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    duration_minutes: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    target_hr: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    notes: Option<String>,
}

impl From<RawPrescription> for ExercisePrescription {
    fn from(raw: RawPrescription) -> Self {
        Self {
            exercise_name: raw.exercise_name.or(raw.name).unwrap_or_default(),
            sets: raw.sets,
            reps: raw.reps,
            rest_seconds: raw.rest_seconds,
            rpe: raw.rpe,
            duration_minutes: raw.duration_minutes,
            target_hr: raw.target_hr,
            notes: raw.notes,
        }
    }
}

impl ExercisePrescription {
    /// Sets x reps prescription
    #[must_use]
    pub fn strength(
        name: impl Into<String>,
        sets: u32,
        reps: impl Into<String>,
        rest_seconds: u32,
        rpe: f64,
    ) -> Self {
        Self {
            exercise_name: name.into(),
            sets: Some(sets),
            reps: Some(reps.into()),
            rest_seconds: Some(rest_seconds),
            rpe: Some(rpe),
            ..Self::default()
        }
    }

    /// Duration and heart-rate prescription
    #[must_use]
    pub fn timed(
        name: impl Into<String>,
        duration_minutes: u32,
        target_hr: u32,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            exercise_name: name.into(),
            duration_minutes: Some(duration_minutes),
            target_hr: Some(target_hr),
            notes: Some(notes.into()),
            ..Self::default()
        }
    }
}

/// A single scheduled training session
///
/// Uniqueness of (week, weekday) slots is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// Week number, 1-based
    #[serde(default = "first_week", deserialize_with = "lenient::week")]
    pub week_number: u32,
    /// Weekday index, 0=Sunday..6=Saturday
    #[serde(default, deserialize_with = "lenient::weekday")]
    pub day_of_week: u8,
    /// Display name
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    /// Focus label (e.g. `Upper Body`)
    #[serde(default, deserialize_with = "lenient::text")]
    pub focus: String,
    /// Ordered prescriptions
    #[serde(default, deserialize_with = "lenient::list")]
    pub exercises: Vec<ExercisePrescription>,
    /// Day notes
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
}

const fn first_week() -> u32 {
    1
}

/// A complete multi-week training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name
    #[serde(default = "default_plan_name", deserialize_with = "lenient::text")]
    pub name: String,
    /// Declared week count
    #[serde(default = "default_weeks", deserialize_with = "lenient::weeks")]
    pub weeks: u8,
    /// Ordered workout days
    #[serde(default, deserialize_with = "lenient::list")]
    pub workout_days: Vec<WorkoutDay>,
    /// Free-text notes for the client
    #[serde(default, deserialize_with = "lenient::text")]
    pub coach_notes: String,
}

fn default_plan_name() -> String {
    SAVED_PLAN_NAME.to_owned()
}

const fn default_weeks() -> u8 {
    PLAN_WEEKS
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            name: default_plan_name(),
            weeks: PLAN_WEEKS,
            workout_days: Vec::new(),
            coach_notes: String::new(),
        }
    }
}

impl Plan {
    /// Every non-empty exercise name, in plan order
    #[must_use]
    pub fn exercise_names(&self) -> Vec<&str> {
        self.workout_days
            .iter()
            .flat_map(|day| &day.exercises)
            .map(|exercise| exercise.exercise_name.as_str())
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Distinct week numbers present in the plan
    #[must_use]
    pub fn distinct_weeks(&self) -> BTreeSet<u32> {
        self.workout_days.iter().map(|day| day.week_number).collect()
    }

    /// Days scheduled in a given week
    pub fn days_in_week(&self, week: u32) -> impl Iterator<Item = &WorkoutDay> {
        self.workout_days
            .iter()
            .filter(move |day| day.week_number == week)
    }
}

/// How the plan returned by a run was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// The model invoked the packaging tool
    Saved,
    /// No plan was packaged; the deterministic template plan was synthesized
    Fallback,
}

/// Deserializers that coerce model-produced JSON instead of rejecting it
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::warn;

    use crate::constants::defaults::PLAN_WEEKS;

    fn number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    fn whole(value: &Value) -> Option<u32> {
        number(value)
            .filter(|n| n.is_finite() && *n >= 0.0 && *n <= f64::from(u32::MAX))
            .map(|n| n.round() as u32)
    }

    pub fn opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(whole(&value))
    }

    pub fn opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(number(&value).filter(|n| n.is_finite()))
    }

    pub fn opt_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(opt_text(deserializer)?.unwrap_or_default())
    }

    pub fn week<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(opt_u32(deserializer)?.unwrap_or(1))
    }

    pub fn weekday<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        Ok(opt_u32(deserializer)?
            .and_then(|day| u8::try_from(day).ok())
            .filter(|day| *day <= 6)
            .unwrap_or(0))
    }

    pub fn weeks<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        Ok(opt_u32(deserializer)?
            .and_then(|weeks| u8::try_from(weeks).ok())
            .unwrap_or(PLAN_WEEKS))
    }

    /// Keeps the elements that parse and drops the rest with a warning
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| match serde_json::from_value(item) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        warn!(index, error = %e, "Dropping unparseable list element");
                        None
                    }
                })
                .collect(),
            Value::Null => Vec::new(),
            other => {
                warn!(found = %other, "Expected a list, using an empty one");
                Vec::new()
            }
        })
    }
}
