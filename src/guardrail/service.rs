// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Moderation facade
//!
//! Owns the shared Bedrock runtime handle and the service configuration, both
//! injected at startup and immutable for the life of the process. Every
//! provider failure is converted into a failure-shaped payload here; nothing
//! below the route layer propagates a raw fault.

use crate::bedrock::types::{
    ApplyGuardrailRequest, ConverseMessage, ConverseRequest, GuardrailConfig, InferenceConfig,
    SystemContentBlock, STOP_REASON_GUARDRAIL_INTERVENED,
};
use crate::bedrock::BedrockRuntime;
use crate::config::ServiceConfig;
use crate::guardrail::interpreter::{apply_default_reason, is_blocked, parse_assessments};
use crate::guardrail::result::{ChatResult, CheckResult};
use std::sync::Arc;

pub struct GuardrailService {
    client: Arc<dyn BedrockRuntime>,
    config: ServiceConfig,
}

impl GuardrailService {
    pub fn new(client: Arc<dyn BedrockRuntime>, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    /// Checks one text against the guardrail.
    ///
    /// Always returns a result payload: a verdict on success, a failure shape
    /// on any client error. The failure shape marks the text blocked only
    /// when the service is configured fail-closed.
    pub async fn check_content(&self, text: &str) -> CheckResult {
        tracing::info!(length = text.len(), "Checking content: {}", preview(text));

        let request = ApplyGuardrailRequest::input(text);
        let response = match self
            .client
            .apply_guardrail(&self.config.guardrail_id, &self.config.guardrail_version, request)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "Error checking content");
                return CheckResult::failure(
                    text,
                    err.to_string(),
                    err.kind(),
                    !self.config.fail_open,
                );
            }
        };

        tracing::info!(action = %response.action, "Guardrail action");

        let reasons = parse_assessments(&response.assessments);

        let masked_text = response
            .outputs
            .first()
            .map(|output| output.text.clone())
            .filter(|masked| !masked.is_empty() && masked != text);
        if masked_text.is_some() {
            tracing::info!("Content was masked");
        }

        let blocked = is_blocked(&response.action);
        let reasons = apply_default_reason(blocked, reasons);

        if blocked {
            tracing::warn!(reasons = ?reasons, "Content BLOCKED");
        } else {
            tracing::info!("Content ALLOWED");
        }

        CheckResult::verdict(text, response.action, reasons, blocked, masked_text)
    }

    /// Runs a chat turn behind a two-phase guardrail gate.
    ///
    /// Phase 1 checks the incoming message; a blocked input short-circuits
    /// and the model is never invoked. Phase 2 sends the message to the model
    /// with the guardrail attached inline, so the provider moderates the
    /// output during generation; a `guardrail_intervened` stop reason is
    /// reported as an output block, distinct from an input block.
    pub async fn chat(&self, message: &str, system_prompt: Option<&str>) -> ChatResult {
        tracing::info!("Processing chat message: {}", preview(message));

        let input_check = self.check_content(message).await;
        if input_check.is_blocked {
            tracing::warn!("Input blocked by guardrail");
            return ChatResult::input_blocked(input_check);
        }

        let request = ConverseRequest {
            messages: vec![ConverseMessage::user(message)],
            system: system_prompt.map(|prompt| vec![SystemContentBlock {
                text: prompt.to_string(),
            }]),
            inference_config: InferenceConfig::default(),
            guardrail_config: GuardrailConfig::new(
                &self.config.guardrail_id,
                &self.config.guardrail_version,
            ),
        };

        tracing::info!(model = %self.config.model_id, "Calling model");
        let response = match self.client.converse(&self.config.model_id, request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "Error in chat");
                return ChatResult::failure(err.to_string(), err.kind());
            }
        };

        tracing::info!(stop_reason = ?response.stop_reason, "Stop reason");
        if response.stop_reason.as_deref() == Some(STOP_REASON_GUARDRAIL_INTERVENED) {
            tracing::warn!("Output blocked by guardrail");
            return ChatResult::output_blocked(input_check, response.stop_reason);
        }

        match response.output_text() {
            Some(text) => {
                tracing::info!(length = text.len(), "AI response generated");
                ChatResult::completed(message, text.to_string(), input_check, response.stop_reason)
            }
            None => {
                tracing::error!("Model response contained no text content");
                ChatResult::failure(
                    "model response contained no text content".to_string(),
                    "InvalidResponse",
                )
            }
        }
    }

    /// Checks a list of texts sequentially, one result per input, in order.
    /// A failed item produces its own failure result and does not stop the
    /// rest of the batch.
    pub async fn check_batch(&self, texts: &[String]) -> Vec<CheckResult> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.check_content(text).await);
        }
        results
    }
}

/// First 100 characters, for log lines; never splits a UTF-8 boundary.
fn preview(text: &str) -> &str {
    match text.char_indices().nth(100) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
