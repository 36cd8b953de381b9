// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/check HTTP handler
//!
//! Validates the body, delegates to the facade, and serializes the result
//! with HTTP 200 regardless of the embedded success/blocked flags.

use crate::api::check::CheckRequest;
use crate::api::http_server::AppState;
use crate::api::ApiError;
use crate::guardrail::CheckResult;
use axum::extract::State;
use axum::Json;

pub async fn check_handler(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResult>, ApiError> {
    let text = request.validate()?;
    Ok(Json(state.service.check_content(text).await))
}
