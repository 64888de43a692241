// ABOUTME: Step orchestrator driving one planning step through the bounded tool-calling loop
// ABOUTME: Prompts, awaits the model, executes every requested tool, and folds results into context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Step Orchestrator
//!
//! One step runs as a small state machine:
//!
//! ```text
//! Prompting -> AwaitingModel -> ExecutingTools -> AwaitingModel -> ... -> Done
//!                    \________________ no tool invocations _________/
//! ```
//!
//! The model is called at most `max_iterations` times per step. Every tool
//! invocation of a response is executed before the model is called again.
//! Provider failures and timeouts count as a response with no content, which
//! ends the step.

use std::sync::Arc;
use std::time::Duration;

use coachforge_core::constants::defaults::MAX_STEP_ITERATIONS;
use coachforge_core::constants::steps;
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use super::context::{PlanningContext, StepMetadata};
use crate::constants::provider;
use crate::errors::ProviderError;
use crate::llm::{LanguageModel, ModelRequest, ModelResponse, ToolDefinition, Turn, TurnContent};
use crate::tools::ToolRegistry;

/// One named step of the planning pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    /// Step name
    pub name: &'static str,
    /// Instruction sent at the start of the step
    pub instruction: String,
    /// Tools the step is expected to use; advisory only
    pub expected_tools: &'static [&'static str],
}

/// Bounds applied to every step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLimits {
    /// Model calls allowed per step
    pub max_iterations: u32,
    /// Output tokens per model call
    pub max_tokens: u32,
    /// Time allowed for one model call
    pub model_timeout: Duration,
}

impl Default for StepLimits {
    fn default() -> Self {
        Self {
            max_iterations: MAX_STEP_ITERATIONS,
            max_tokens: provider::DEFAULT_MAX_TOKENS,
            model_timeout: Duration::from_secs(provider::DEFAULT_TIMEOUT_SECS),
        }
    }
}

enum StepState {
    Prompting,
    AwaitingModel,
    ExecutingTools(ModelResponse),
    Done,
}

/// Drives single planning steps against a model and a tool registry
#[derive(Clone)]
pub struct StepOrchestrator {
    model: Arc<dyn LanguageModel>,
    registry: ToolRegistry,
    tool_definitions: Vec<ToolDefinition>,
    system_prompt: String,
    limits: StepLimits,
}

impl StepOrchestrator {
    /// Create an orchestrator with default limits
    #[must_use]
    pub fn new(
        model: Arc<dyn LanguageModel>,
        registry: ToolRegistry,
        system_prompt: impl Into<String>,
    ) -> Self {
        let tool_definitions = registry.definitions();
        Self {
            model,
            registry,
            tool_definitions,
            system_prompt: system_prompt.into(),
            limits: StepLimits::default(),
        }
    }

    /// Replace the step limits
    #[must_use]
    pub const fn with_limits(mut self, limits: StepLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Limits in effect
    #[must_use]
    pub const fn limits(&self) -> StepLimits {
        self.limits
    }

    /// Run one step to completion, recording its metadata in the context
    #[instrument(name = "plan_step", skip_all, fields(step = step.name))]
    pub async fn run(&self, step: &StepDefinition, context: &mut PlanningContext) -> StepMetadata {
        let mut state = StepState::Prompting;
        let mut iterations = 0_u32;
        let mut final_response = String::new();

        loop {
            state = match state {
                StepState::Prompting => {
                    let prompt = build_step_prompt(step, context);
                    context.push_turn(Turn::user_text(prompt));
                    StepState::AwaitingModel
                }
                StepState::AwaitingModel => {
                    iterations += 1;
                    let response = self.call_model(context).await;
                    final_response = response.text();
                    if !response.content.is_empty() {
                        context.push_turn(Turn::assistant(response.content.clone()));
                    }

                    if response.has_tool_invocations() {
                        StepState::ExecutingTools(response)
                    } else {
                        StepState::Done
                    }
                }
                StepState::ExecutingTools(response) => {
                    self.execute_tools(&response, context);
                    if iterations >= self.limits.max_iterations {
                        warn!(
                            iterations,
                            "Iteration ceiling reached, ending step with tool calls pending"
                        );
                        StepState::Done
                    } else {
                        StepState::AwaitingModel
                    }
                }
                StepState::Done => break,
            };
        }

        let metadata = StepMetadata {
            iterations,
            final_response,
        };
        info!(iterations, "Step complete");
        context.record_step(step.name, metadata.clone());
        metadata
    }

    async fn call_model(&self, context: &PlanningContext) -> ModelResponse {
        let request = ModelRequest::new(
            &self.system_prompt,
            &self.tool_definitions,
            context.transcript(),
            self.limits.max_tokens,
        );

        timeout(self.limits.model_timeout, self.model.respond(&request))
            .await
            .unwrap_or_else(|_| {
                Err(ProviderError::Timeout {
                    seconds: self.limits.model_timeout.as_secs(),
                })
            })
            .unwrap_or_else(|error| {
                warn!(
                    provider = self.model.name(),
                    transient = error.is_transient(),
                    "Model call failed, treating as empty response: {error}"
                );
                ModelResponse::empty()
            })
    }

    fn execute_tools(&self, response: &ModelResponse, context: &mut PlanningContext) {
        let mut results = Vec::new();
        for invocation in response.tool_invocations() {
            debug!(tool = invocation.name, "Executing tool");
            let outcome =
                self.registry
                    .execute(invocation.name, invocation.input, context.tool_context());
            if !outcome.is_error {
                context.fold(invocation.name, &outcome.value);
            }
            results.push(TurnContent::ToolResult {
                tool_use_id: invocation.id.to_owned(),
                content: outcome.content(),
                is_error: outcome.is_error,
            });
        }
        context.push_turn(Turn::tool_results(results));
    }
}

fn json_section(title: &str, value: &impl Serialize) -> Option<String> {
    serde_json::to_string_pretty(value)
        .ok()
        .map(|json| format!("## {title}\n```json\n{json}\n```"))
}

/// Instruction plus the context the step needs
///
/// The assessment step carries the assessment; every step carries the coach
/// preferences; later steps carry what earlier steps produced.
#[must_use]
pub fn build_step_prompt(step: &StepDefinition, context: &PlanningContext) -> String {
    let mut parts = vec![step.instruction.trim_end().to_owned()];
    let first_step = step.name == steps::ANALYZE_ASSESSMENT;

    if first_step {
        parts.extend(json_section("Client Assessment Data", context.assessment()));
    }
    parts.extend(json_section("Coach Preferences", context.preferences()));

    if !first_step {
        if let Some(analysis) = context.screen_analysis() {
            parts.extend(json_section("Movement Screen Analysis (from previous step)", analysis));
        }
        if let Some(structure) = context.weekly_structure() {
            parts.extend(json_section("Weekly Volume Targets", structure));
        }
        if !context.exercise_candidates().is_empty() {
            let names: Vec<&str> = context
                .exercise_candidates()
                .iter()
                .map(|entry| entry.name.as_str())
                .collect();
            parts.push(format!("## Candidate Exercises\n{}", names.join(", ")));
        }
    }

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use coachforge_core::constants::tools;
    use coachforge_core::models::{Assessment, CoachPreferences};
    use coachforge_intelligence::catalog::ExerciseCatalog;
    use serde_json::json;

    use super::*;

    fn step(name: &'static str) -> StepDefinition {
        StepDefinition {
            name,
            instruction: "Do the thing.\n".to_owned(),
            expected_tools: &[],
        }
    }

    fn context() -> PlanningContext {
        PlanningContext::new(
            Assessment::default(),
            CoachPreferences::default(),
            Arc::new(ExerciseCatalog::builtin()),
        )
    }

    #[test]
    fn test_first_prompt_carries_assessment() {
        let prompt = build_step_prompt(&step("analyze_assessment"), &context());
        assert!(prompt.starts_with("Do the thing.\n\n## Client Assessment Data"));
        assert!(prompt.contains("## Coach Preferences"));
        assert!(!prompt.contains("Movement Screen Analysis"));
    }

    #[test]
    fn test_later_prompt_carries_prior_results() {
        let mut context = context();
        context.fold(tools::ANALYZE_FMS_SCORES, &json!({"risk_level": "HIGH"}));
        context.fold(
            tools::QUERY_EXERCISE_LIBRARY,
            &json!({"exercises": [{"name": "Box Squat"}, {"name": "Glute Bridge"}]}),
        );

        let prompt = build_step_prompt(&step("select_exercises"), &context);
        assert!(!prompt.contains("Client Assessment Data"));
        assert!(prompt.contains("\"risk_level\": \"HIGH\""));
        assert!(prompt.contains("## Candidate Exercises\nBox Squat, Glute Bridge"));
    }
}
