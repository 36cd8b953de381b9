// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/batch-check HTTP handler

use crate::api::batch_check::{BatchCheckRequest, BatchCheckResponse};
use crate::api::http_server::AppState;
use crate::api::ApiError;
use axum::extract::State;
use axum::Json;

pub async fn batch_check_handler(
    State(state): State<AppState>,
    Json(request): Json<BatchCheckRequest>,
) -> Result<Json<BatchCheckResponse>, ApiError> {
    let texts = request.validate()?;
    let results = state.service.check_batch(texts).await;
    Ok(Json(BatchCheckResponse::new(results)))
}
