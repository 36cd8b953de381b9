// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/chat HTTP handler

use crate::api::chat::ChatRequest;
use crate::api::http_server::AppState;
use crate::api::ApiError;
use crate::guardrail::ChatResult;
use axum::extract::State;
use axum::Json;

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResult>, ApiError> {
    let message = request.validate()?;
    let result = state
        .service
        .chat(message, request.system_prompt.as_deref())
        .await;
    Ok(Json(result))
}
