// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use guardrail_api::{
    api::{start_server, AppState},
    bedrock::BedrockClient,
    config::ServiceConfig,
    guardrail::GuardrailService,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    // config/.env first for parity with older deployments, then ./.env
    dotenv::from_path("config/.env").ok();
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        let debug = env::var("DEBUG")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);
        env::set_var("RUST_LOG", if debug { "debug" } else { "info" });
    }
    tracing_subscriber::fmt::init();

    tracing::info!("Starting {}", guardrail_api::version::get_version_string());

    // Fails fast when GUARDRAIL_ID is absent
    let config = ServiceConfig::from_env()?;

    let client = Arc::new(BedrockClient::from_config(&config));
    tracing::info!("Initialized Bedrock client in region: {}", config.region);
    tracing::info!("Using Guardrail ID: {}", config.guardrail_id);
    tracing::info!("Guardrail Version: {}", config.guardrail_version);
    if !config.fail_open {
        tracing::info!("Fail-closed mode: failed checks will be reported as blocked");
    }

    let service = Arc::new(GuardrailService::new(client, config.clone()));
    let state = AppState::new(service);

    tracing::info!(
        "Server running at http://{}:{}",
        config.api_host,
        config.api_port
    );
    tracing::info!(
        "Health check: http://{}:{}/health",
        config.api_host,
        config.api_port
    );

    start_server(state, &config.api_host, config.api_port).await
}
