// ABOUTME: Language-model boundary for tool-augmented planning conversations
// ABOUTME: Transcript, content block, and tool definition types plus the LanguageModel trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Language Model Interface
//!
//! The model is an opaque capability: given a system instruction, a tool
//! catalog, and a transcript, it returns an ordered list of content blocks,
//! each either free text or a tool invocation.
//!
//! ## Key Concepts
//!
//! - **`ContentBlock`**: tagged variant of model output, matched exhaustively
//! - **`Turn`**: one transcript entry; user turns may carry tool results
//! - **`Transcript`**: append-only turn list, extended by value
//! - **`LanguageModel`**: async trait implemented by each provider
//!
//! ## Example
//!
//! ```rust,no_run
//! use coachforge::llm::{LanguageModel, ModelRequest, Transcript, Turn};
//!
//! async fn example(model: &dyn LanguageModel) {
//!     let transcript = Transcript::new().appended(Turn::user_text("Plan my week"));
//!     let request = ModelRequest::new("You are a coach.", &[], &transcript, 1024);
//!     let response = model.respond(&request).await;
//! }
//! ```

mod anthropic;
mod offline;

pub use anthropic::AnthropicProvider;
pub use offline::OfflineModel;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::config::ProviderSettings;
use crate::errors::ProviderError;

// ============================================================================
// Content Types
// ============================================================================

/// Author of a transcript turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions and tool results
    User,
    /// Model output
    Assistant,
}

/// One block of model output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Free text
    Text {
        /// Text content
        text: String,
    },
    /// Request to execute a named tool
    ToolUse {
        /// Opaque identifier echoed on the matching result
        id: String,
        /// Tool wire name
        name: String,
        /// Structured tool input
        input: Value,
    },
}

impl ContentBlock {
    /// Text block
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Tool invocation block
    #[must_use]
    pub fn tool_use(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self::ToolUse {
            id: id.into(),
            name: name.into(),
            input,
        }
    }
}

/// Borrowed view of a tool invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolInvocation<'a> {
    /// Identifier to echo on the result
    pub id: &'a str,
    /// Tool wire name
    pub name: &'a str,
    /// Tool input
    pub input: &'a Value,
}

/// Content of a transcript turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnContent {
    /// Free text
    Text {
        /// Text content
        text: String,
    },
    /// Tool invocation emitted by the model
    ToolUse {
        /// Invocation identifier
        id: String,
        /// Tool wire name
        name: String,
        /// Tool input
        input: Value,
    },
    /// Result of executing a tool invocation
    ToolResult {
        /// Identifier of the invocation this answers
        tool_use_id: String,
        /// Serialized tool output or error object
        content: String,
        /// Whether the content is an error object
        #[serde(default, skip_serializing_if = "is_false")]
        is_error: bool,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde skip_serializing_if passes by reference
const fn is_false(value: &bool) -> bool {
    !*value
}

impl From<ContentBlock> for TurnContent {
    fn from(block: ContentBlock) -> Self {
        match block {
            ContentBlock::Text { text } => Self::Text { text },
            ContentBlock::ToolUse { id, name, input } => Self::ToolUse { id, name, input },
        }
    }
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Author
    pub role: Role,
    /// Ordered content
    pub content: Vec<TurnContent>,
}

impl Turn {
    /// User turn carrying plain text
    #[must_use]
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![TurnContent::Text { text: text.into() }],
        }
    }

    /// Assistant turn echoing a model response
    #[must_use]
    pub fn assistant(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content: blocks.into_iter().map(TurnContent::from).collect(),
        }
    }

    /// User turn carrying tool results
    #[must_use]
    pub fn tool_results(results: Vec<TurnContent>) -> Self {
        Self {
            role: Role::User,
            content: results,
        }
    }

    /// Concatenated text content
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|content| match content {
                TurnContent::Text { text } => Some(text.as_str()),
                TurnContent::ToolUse { .. } | TurnContent::ToolResult { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Append-only conversation history
///
/// Turns are shared behind an `Arc`, so cloning a transcript is cheap and
/// earlier turns can never be edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    turns: Vec<Arc<Turn>>,
}

impl Transcript {
    /// Empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript extended by one turn
    #[must_use]
    pub fn appended(mut self, turn: Turn) -> Self {
        self.turns.push(Arc::new(turn));
        self
    }

    /// Turns in order
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().map(AsRef::as_ref)
    }

    /// Most recent turn
    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last().map(AsRef::as_ref)
    }

    /// Number of turns
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Serialize for Transcript {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.turns())
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Tool catalog entry sent to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool wire name
    pub name: String,
    /// What the tool does
    pub description: String,
    /// JSON schema of the tool input
    pub input_schema: Value,
}

/// One model call
#[derive(Debug, Clone, Copy)]
pub struct ModelRequest<'a> {
    /// System instruction
    pub system: &'a str,
    /// Tool catalog
    pub tools: &'a [ToolDefinition],
    /// Conversation so far
    pub transcript: &'a Transcript,
    /// Maximum output tokens
    pub max_tokens: u32,
}

impl<'a> ModelRequest<'a> {
    /// Assemble a request
    #[must_use]
    pub const fn new(
        system: &'a str,
        tools: &'a [ToolDefinition],
        transcript: &'a Transcript,
        max_tokens: u32,
    ) -> Self {
        Self {
            system,
            tools,
            transcript,
            max_tokens,
        }
    }
}

/// Model output for one call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Ordered content blocks
    pub content: Vec<ContentBlock>,
    /// Provider stop reason, informational only
    pub stop_reason: Option<String>,
}

impl ModelResponse {
    /// Response with no content
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Response with the given blocks
    #[must_use]
    pub fn from_blocks(content: Vec<ContentBlock>) -> Self {
        Self {
            content,
            stop_reason: None,
        }
    }

    /// Concatenated text blocks
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::ToolUse { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Tool invocations in response order
    pub fn tool_invocations(&self) -> impl Iterator<Item = ToolInvocation<'_>> {
        self.content.iter().filter_map(|block| match block {
            ContentBlock::ToolUse { id, name, input } => Some(ToolInvocation { id, name, input }),
            ContentBlock::Text { .. } => None,
        })
    }

    /// Whether the response requests any tool execution
    #[must_use]
    pub fn has_tool_invocations(&self) -> bool {
        self.tool_invocations().next().is_some()
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Language model provider
///
/// A run awaits each call before issuing the next, so implementations never
/// see overlapping calls for the same run.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Provider identifier
    fn name(&self) -> &str;

    /// Model identifier
    fn model(&self) -> &str;

    /// Produce the next assistant response
    async fn respond(&self, request: &ModelRequest<'_>) -> Result<ModelResponse, ProviderError>;
}

/// Build the provider selected by configuration: HTTP when an API key is set, offline otherwise
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created
pub fn provider_from_settings(
    settings: &ProviderSettings,
) -> Result<Arc<dyn LanguageModel>, ProviderError> {
    if settings.api_key.is_some() {
        Ok(Arc::new(AnthropicProvider::new(settings)?))
    } else {
        info!("No model API key configured, using offline model");
        Ok(Arc::new(OfflineModel::new()))
    }
}
