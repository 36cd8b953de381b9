// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;

use super::{batch_check_handler, chat_handler, check_handler, health_handler};
use crate::guardrail::GuardrailService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GuardrailService>,
}

impl AppState {
    pub fn new(service: Arc<GuardrailService>) -> Self {
        Self { service }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Static frontend
        .route_service("/", ServeFile::new("public/index.html"))
        // Health check
        .route("/health", get(health_handler))
        // Moderation endpoints
        .route("/api/check", post(check_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/batch-check", post(batch_check_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_app(state);

    let addr = format!("{host}:{port}").parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
