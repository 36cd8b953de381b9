// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Response body for POST /api/batch-check

use crate::guardrail::CheckResult;
use serde::{Deserialize, Serialize};

/// One result per input text, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCheckResponse {
    pub count: usize,
    pub results: Vec<CheckResult>,
}

impl BatchCheckResponse {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}
