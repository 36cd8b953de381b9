// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Request body for POST /api/batch-check

use crate::api::ApiError;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/batch-check
///
/// # Example
/// ```json
/// {"texts": ["first text", "second text"]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCheckRequest {
    #[serde(default)]
    pub texts: Option<Vec<String>>,
}

impl BatchCheckRequest {
    pub fn validate(&self) -> Result<&[String], ApiError> {
        self.texts
            .as_deref()
            .ok_or_else(|| ApiError::missing_array("texts"))
    }
}
