// ABOUTME: HTTP language-model provider speaking the Anthropic messages API
// ABOUTME: Sends system text, tool catalog, and transcript; parses text and tool_use blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{ContentBlock, LanguageModel, ModelRequest, ModelResponse, ToolDefinition, Transcript};
use crate::config::ProviderSettings;
use crate::constants::provider;
use crate::errors::ProviderError;

/// Provider identifier
const PROVIDER_NAME: &str = "anthropic";

/// Longest error body excerpt kept in error messages
const ERROR_BODY_EXCERPT: usize = 300;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    system: &'a str,
    #[serde(skip_serializing_if = "<[ToolDefinition]>::is_empty")]
    tools: &'a [ToolDefinition],
    messages: &'a Transcript,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<WireBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        #[serde(default)]
        input: Value,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "type", default)]
    error_type: String,
    message: String,
}

/// Messages API client
pub struct AnthropicProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
}

impl AnthropicProvider {
    /// Create a provider from settings
    ///
    /// # Errors
    ///
    /// Returns `NotConfigured` without an API key, or `Http` if the client cannot be built
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or(ProviderError::NotConfigured("ANTHROPIC_API_KEY"))?;
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                settings.base_url.trim_end_matches('/'),
                provider::MESSAGES_PATH
            ),
            api_key,
            model: settings.model.clone(),
            timeout_secs: settings.timeout.as_secs(),
        })
    }

    fn parse_error_response(status: StatusCode, body: &str) -> ProviderError {
        let message = serde_json::from_str::<ErrorEnvelope>(body).map_or_else(
            |_| body.chars().take(ERROR_BODY_EXCERPT).collect(),
            |envelope| format!("{}: {}", envelope.error.error_type, envelope.error.message),
        );
        ProviderError::Api {
            status: status.as_u16(),
            message,
        }
    }

    fn convert_blocks(blocks: Vec<WireBlock>) -> Vec<ContentBlock> {
        blocks
            .into_iter()
            .filter_map(|block| match block {
                WireBlock::Text { text } => Some(ContentBlock::Text { text }),
                WireBlock::ToolUse { id, name, input } => {
                    Some(ContentBlock::ToolUse { id, name, input })
                }
                WireBlock::Unsupported => None,
            })
            .collect()
    }
}

#[async_trait]
impl LanguageModel for AnthropicProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model, turns = request.transcript.len()))]
    async fn respond(&self, request: &ModelRequest<'_>) -> Result<ModelResponse, ProviderError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            system: request.system,
            tools: request.tools,
            messages: request.transcript,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", provider::API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|error| {
                if error.is_timeout() {
                    ProviderError::Timeout {
                        seconds: self.timeout_secs,
                    }
                } else {
                    ProviderError::Http(error)
                }
            })?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::parse_error_response(status, &text));
        }

        let parsed: MessagesResponse = serde_json::from_str(&text)
            .map_err(|error| ProviderError::Parse(error.to_string()))?;
        let content = Self::convert_blocks(parsed.content);

        debug!(
            blocks = content.len(),
            stop_reason = ?parsed.stop_reason,
            "Received model response"
        );

        Ok(ModelResponse {
            content,
            stop_reason: parsed.stop_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        let result = AnthropicProvider::new(&ProviderSettings::default());
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }

    #[test]
    fn test_error_body_parsing() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        let error = AnthropicProvider::parse_error_response(StatusCode::SERVICE_UNAVAILABLE, body);
        assert!(matches!(
            error,
            ProviderError::Api { status: 503, ref message } if message == "overloaded_error: Overloaded"
        ));
    }

    #[test]
    fn test_unknown_blocks_are_dropped() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"Done"},
               {"type":"tool_use","id":"t1","name":"save_workout_plan","input":{"weeks":4}}],
               "stop_reason":"tool_use"}"#,
        )
        .unwrap();
        let blocks = AnthropicProvider::convert_blocks(parsed.content);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], ContentBlock::text("Done"));
    }
}
