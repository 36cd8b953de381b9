// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Result payloads returned to HTTP callers
//!
//! Moderation outcomes are encoded in these payloads, never in HTTP status
//! codes. Optional fields are omitted from the JSON entirely so the success
//! and failure shapes stay distinct.

use serde::{Deserialize, Serialize};

/// Outcome of a single guardrail check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub success: bool,
    /// Original input text, echoed back on both success and failure.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
    pub is_blocked: bool,
    /// Redacted variant of the input, present only when the provider returned
    /// one that differs from the original.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl CheckResult {
    /// Successful check with an interpreted verdict.
    pub fn verdict(
        text: &str,
        action: String,
        reasons: Vec<String>,
        is_blocked: bool,
        masked_text: Option<String>,
    ) -> Self {
        Self {
            success: true,
            text: text.to_string(),
            action: Some(action),
            reasons,
            is_blocked,
            masked_text,
            error: None,
            error_type: None,
        }
    }

    /// Failure shape for a guardrail call that did not complete. Whether the
    /// text counts as blocked is the caller's fail-open/fail-closed decision.
    /// A blocked failure still carries the default blocked reason; a blocked
    /// result never has an empty reasons list.
    pub fn failure(text: &str, error: String, error_type: &str, is_blocked: bool) -> Self {
        let reasons = if is_blocked {
            vec![crate::guardrail::DEFAULT_BLOCKED_REASON.to_string()]
        } else {
            Vec::new()
        };
        Self {
            success: false,
            text: text.to_string(),
            action: None,
            reasons,
            is_blocked,
            masked_text: None,
            error: Some(error),
            error_type: Some(error_type.to_string()),
        }
    }
}

/// Outcome of a guarded chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_safe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
    /// The input-phase check, embedded whenever that phase ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_check: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl ChatResult {
    /// Model responded and the output passed the guardrail.
    pub fn completed(
        user_message: &str,
        ai_response: String,
        input_check: CheckResult,
        stop_reason: Option<String>,
    ) -> Self {
        Self {
            success: true,
            user_message: Some(user_message.to_string()),
            ai_response: Some(ai_response),
            is_safe: Some(true),
            message: None,
            reasons: Vec::new(),
            input_check: Some(input_check),
            stop_reason,
            error: None,
            error_type: None,
        }
    }

    /// Input phase blocked the message; the model was never invoked.
    pub fn input_blocked(input_check: CheckResult) -> Self {
        Self {
            success: false,
            user_message: None,
            ai_response: None,
            is_safe: None,
            message: Some("Tin nhắn của bạn bị chặn vì vi phạm chính sách nội dung".to_string()),
            reasons: input_check.reasons.clone(),
            input_check: Some(input_check),
            stop_reason: None,
            error: None,
            error_type: None,
        }
    }

    /// The guardrail intervened on the model's output during generation.
    pub fn output_blocked(input_check: CheckResult, stop_reason: Option<String>) -> Self {
        Self {
            success: false,
            user_message: None,
            ai_response: None,
            is_safe: None,
            message: Some("Phản hồi của AI bị chặn vì vi phạm chính sách nội dung".to_string()),
            reasons: vec!["Output vi phạm guardrail".to_string()],
            input_check: Some(input_check),
            stop_reason,
            error: None,
            error_type: None,
        }
    }

    /// Transport/client failure at either phase.
    pub fn failure(error: String, error_type: &str) -> Self {
        Self {
            success: false,
            user_message: None,
            ai_response: None,
            is_safe: None,
            message: None,
            reasons: Vec::new(),
            input_check: None,
            stop_reason: None,
            error: Some(error),
            error_type: Some(error_type.to_string()),
        }
    }
}
