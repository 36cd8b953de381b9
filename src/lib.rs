// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod bedrock;
pub mod config;
pub mod guardrail;
pub mod version;

// Re-export the types callers wire together at startup
pub use api::{create_app, start_server, AppState};
pub use bedrock::{BedrockClient, BedrockError, BedrockRuntime};
pub use config::ServiceConfig;
pub use guardrail::{ChatResult, CheckResult, GuardrailService};
