// ABOUTME: Shared test utilities for planning integration tests
// ABOUTME: Scripted language model replaying queued responses plus assessment and plan fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `coachforge`

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use coachforge::errors::ProviderError;
use coachforge::llm::{
    ContentBlock, LanguageModel, ModelRequest, ModelResponse, Transcript, Turn, TurnContent,
};
use coachforge_core::models::{
    Assessment, Availability, ExerciseHistory, ExperienceLevel, FitnessGoals, InjuryHistory,
    MovementScreenScores,
};
use serde_json::{json, Value};
use tokio::time::sleep;

/// What the scripted model was asked
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub system: String,
    pub tool_names: Vec<String>,
    pub transcript: Transcript,
    pub max_tokens: u32,
}

impl RecordedRequest {
    /// Text of the most recent user turn
    pub fn last_text(&self) -> String {
        self.transcript.last().map(Turn::text).unwrap_or_default()
    }

    /// Tool results carried by the most recent turn
    pub fn last_tool_results(&self) -> Vec<(String, String, bool)> {
        self.transcript
            .last()
            .map(|turn| {
                turn.content
                    .iter()
                    .filter_map(|content| match content {
                        TurnContent::ToolResult {
                            tool_use_id,
                            content,
                            is_error,
                        } => Some((tool_use_id.clone(), content.clone(), *is_error)),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Language model that replays queued results and then answers with nothing
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<ModelResponse, ProviderError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    delay: Option<Duration>,
    repeat_last: bool,
}

impl ScriptedModel {
    pub fn new(responses: Vec<ModelResponse>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    pub fn with_results(results: Vec<Result<ModelResponse, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
            delay: None,
            repeat_last: false,
        }
    }

    /// Model that answers every call with the same response
    pub fn always(response: ModelResponse) -> Self {
        Self {
            repeat_last: true,
            ..Self::new(vec![response])
        }
    }

    /// Sleep before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_result(&self) -> Result<ModelResponse, ProviderError> {
        let mut queue = self.responses.lock().unwrap();
        if self.repeat_last && queue.len() == 1 {
            return match queue.front() {
                Some(Ok(response)) => Ok(response.clone()),
                _ => Ok(ModelResponse::empty()),
            };
        }
        queue.pop_front().unwrap_or_else(|| Ok(ModelResponse::empty()))
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-test"
    }

    async fn respond(&self, request: &ModelRequest<'_>) -> Result<ModelResponse, ProviderError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            system: request.system.to_owned(),
            tool_names: request.tools.iter().map(|tool| tool.name.clone()).collect(),
            transcript: request.transcript.clone(),
            max_tokens: request.max_tokens,
        });
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        self.next_result()
    }
}

/// Response holding only text
pub fn text_response(text: &str) -> ModelResponse {
    ModelResponse::from_blocks(vec![ContentBlock::text(text)])
}

/// Response holding one tool invocation
pub fn tool_response(id: &str, name: &str, input: Value) -> ModelResponse {
    ModelResponse::from_blocks(vec![ContentBlock::tool_use(id, name, input)])
}

/// Beginner with poor shoulder mobility training three days a week
pub fn beginner_assessment() -> Assessment {
    Assessment {
        fms_scores: MovementScreenScores::new([1, 2, 2, 1, 2, 2, 2]),
        fitness_goals: FitnessGoals {
            priority_focus: vec!["fat_loss".into(), "general_fitness".into()],
            ..FitnessGoals::default()
        },
        exercise_history: ExerciseHistory {
            experience_level: ExperienceLevel::Beginner,
            ..ExerciseHistory::default()
        },
        availability: Availability {
            days_per_week: Some(3),
            minutes_per_session: Some(45),
            preferred_days: vec!["Monday".into(), "Wednesday".into(), "Friday".into()],
            equipment_access: vec!["dumbbell".into(), "kettlebell".into()],
            training_location: Some("home".into()),
        },
        injuries: InjuryHistory {
            past_injuries: vec!["lower back pain 2 years ago".into()],
            current_limitations: vec!["shoulder stiffness".into()],
            pain_areas: Vec::new(),
        },
        ..Assessment::default()
    }
}

/// `save_workout_plan` input for a 4-week, 3-day beginner plan
pub fn beginner_plan_input() -> Value {
    let mut days = Vec::new();
    for week in 1..=4 {
        let rpe = if week >= 3 { 7 } else { 6 };
        for (day_of_week, focus) in [(1, "Lower Body"), (3, "Upper Body"), (5, "Full Body")] {
            days.push(json!({
                "week_number": week,
                "day_of_week": day_of_week,
                "name": format!("Week {week} - {focus}"),
                "focus": focus,
                "exercises": [
                    {"exercise_name": "Goblet Squat", "sets": 3, "reps": "10-12", "rest_seconds": 90, "rpe": rpe},
                    {"exercise_name": "Landmine Press", "sets": 3, "reps": "10-12", "rest_seconds": 90, "rpe": rpe},
                    {"exercise_name": "Plank", "sets": 3, "reps": "30 sec", "rest_seconds": 60, "rpe": rpe}
                ],
                "notes": ""
            }));
        }
    }

    json!({
        "plan_name": "Foundations Block",
        "weeks": 4,
        "workout_days": days,
        "coach_notes": "Keep two reps in reserve."
    })
}
