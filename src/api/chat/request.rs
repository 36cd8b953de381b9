// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Request body for POST /api/chat

use crate::api::ApiError;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/chat
///
/// # Example
/// ```json
/// {"message": "Hello, how are you?", "system_prompt": "Answer in Vietnamese"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Optional system instruction forwarded to the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl ChatRequest {
    pub fn validate(&self) -> Result<&str, ApiError> {
        self.message
            .as_deref()
            .ok_or_else(|| ApiError::missing_field("message"))
    }
}
