// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Request body for POST /api/check
//!
//! `text` deserializes as optional so a missing field can be reported with
//! the service's own 400 payload instead of an extractor rejection.

use crate::api::ApiError;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/check
///
/// # Example
/// ```json
/// {"text": "Xin chào, tôi cần hỗ trợ về sản phẩm"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl CheckRequest {
    /// Returns the text to check, or a 400-level error if the field is absent.
    pub fn validate(&self) -> Result<&str, ApiError> {
        self.text
            .as_deref()
            .ok_or_else(|| ApiError::missing_field("text"))
    }
}
