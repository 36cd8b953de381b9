// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod batch_check;
pub mod chat;
pub mod check;
pub mod errors;
pub mod handlers;
pub mod http_server;

pub use batch_check::{batch_check_handler, BatchCheckRequest, BatchCheckResponse};
pub use chat::{chat_handler, ChatRequest};
pub use check::{check_handler, CheckRequest};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{health_handler, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
