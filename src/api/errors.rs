// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route-layer errors
//!
//! Only malformed requests produce a non-200 response; moderation outcomes
//! and provider failures are encoded in the result payloads instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    InvalidRequest(String),
}

impl ApiError {
    pub fn missing_field(field: &str) -> Self {
        ApiError::InvalidRequest(format!("Missing '{field}' field"))
    }

    pub fn missing_array(field: &str) -> Self {
        ApiError::InvalidRequest(format!("Missing '{field}' array"))
    }

    pub fn to_response(&self) -> ErrorResponse {
        let ApiError::InvalidRequest(message) = self;
        ErrorResponse {
            error: message.clone(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(message) => write!(f, "Invalid request: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
