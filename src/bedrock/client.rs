// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTTP client for the Bedrock runtime API
//!
//! The `BedrockRuntime` trait is the seam between the moderation facade and
//! the remote provider; the facade only ever sees this trait, so tests can
//! substitute a scripted runtime. `BedrockClient` is the real implementation:
//! plain JSON over HTTPS with bearer-token auth, no retries, default reqwest
//! timeouts.

use crate::config::ServiceConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::types::{
    ApplyGuardrailRequest, ApplyGuardrailResponse, ConverseRequest, ConverseResponse,
};

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("request to Bedrock failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Bedrock returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected Bedrock response: {0}")]
    InvalidResponse(String),
}

impl BedrockError {
    /// Short kind string mirrored into failure payloads as `error_type`.
    pub fn kind(&self) -> &'static str {
        match self {
            BedrockError::Transport(_) => "TransportError",
            BedrockError::Api { .. } => "ApiError",
            BedrockError::InvalidResponse(_) => "InvalidResponse",
        }
    }
}

/// The two Bedrock runtime operations this service depends on.
#[async_trait]
pub trait BedrockRuntime: Send + Sync {
    /// Runs the guardrail identified by `guardrail_id`/`guardrail_version`
    /// against the request content and returns the provider's verdict.
    async fn apply_guardrail(
        &self,
        guardrail_id: &str,
        guardrail_version: &str,
        request: ApplyGuardrailRequest,
    ) -> Result<ApplyGuardrailResponse, BedrockError>;

    /// Sends a conversation turn to `model_id` with the inline guardrail
    /// config attached.
    async fn converse(
        &self,
        model_id: &str,
        request: ConverseRequest,
    ) -> Result<ConverseResponse, BedrockError>;
}

/// reqwest-backed Bedrock runtime client.
///
/// Stateless and safe for concurrent use; one instance is created at startup
/// and shared behind an `Arc` for the life of the process.
pub struct BedrockClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl BedrockClient {
    /// Client for the regional Bedrock runtime endpoint.
    pub fn new(region: &str, bearer_token: Option<String>) -> Self {
        Self::with_endpoint(
            format!("https://bedrock-runtime.{region}.amazonaws.com"),
            bearer_token,
        )
    }

    /// Client for an explicit endpoint URL (local stacks, test servers).
    pub fn with_endpoint(base_url: String, bearer_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        match &config.endpoint {
            Some(endpoint) => Self::with_endpoint(endpoint.clone(), config.bearer_token.clone()),
            None => Self::new(&config.region, config.bearer_token.clone()),
        }
    }

    fn apply_guardrail_url(&self, guardrail_id: &str, guardrail_version: &str) -> String {
        format!(
            "{}/guardrail/{}/version/{}/apply",
            self.base_url, guardrail_id, guardrail_version
        )
    }

    fn converse_url(&self, model_id: &str) -> String {
        format!("{}/model/{}/converse", self.base_url, model_id)
    }

    async fn post_json<B, R>(&self, url: String, body: &B) -> Result<R, BedrockError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BedrockError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl BedrockRuntime for BedrockClient {
    async fn apply_guardrail(
        &self,
        guardrail_id: &str,
        guardrail_version: &str,
        request: ApplyGuardrailRequest,
    ) -> Result<ApplyGuardrailResponse, BedrockError> {
        let url = self.apply_guardrail_url(guardrail_id, guardrail_version);
        tracing::debug!(%url, "Calling ApplyGuardrail");
        self.post_json(url, &request).await
    }

    async fn converse(
        &self,
        model_id: &str,
        request: ConverseRequest,
    ) -> Result<ConverseResponse, BedrockError> {
        let url = self.converse_url(model_id);
        tracing::debug!(%url, "Calling Converse");
        self.post_json(url, &request).await
    }
}
