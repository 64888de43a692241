// ABOUTME: Offline language model that never produces content
// ABOUTME: Drives every planning step straight to completion and the run to the fallback plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;

use super::{LanguageModel, ModelRequest, ModelResponse};
use crate::constants::provider;
use crate::errors::ProviderError;

/// Model used when no provider is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineModel;

impl OfflineModel {
    /// Create the offline model
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LanguageModel for OfflineModel {
    fn name(&self) -> &str {
        provider::OFFLINE
    }

    fn model(&self) -> &str {
        provider::OFFLINE
    }

    async fn respond(&self, _request: &ModelRequest<'_>) -> Result<ModelResponse, ProviderError> {
        Ok(ModelResponse::empty())
    }
}
