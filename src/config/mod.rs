// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Service configuration
//!
//! All configuration comes from environment variables (optionally loaded from
//! a `.env` file by `main`). `GUARDRAIL_ID` is the only required variable;
//! startup fails fast without it.

use anyhow::{anyhow, Result};
use std::env;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_GUARDRAIL_VERSION: &str = "1";
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// AWS region the Bedrock runtime endpoint lives in.
    pub region: String,
    /// Guardrail identifier, configured on the provider side.
    pub guardrail_id: String,
    pub guardrail_version: String,
    /// Model used for the chat endpoint.
    pub model_id: String,
    pub api_host: String,
    pub api_port: u16,
    /// Bearer token for the Bedrock runtime API (AWS_BEARER_TOKEN_BEDROCK).
    pub bearer_token: Option<String>,
    /// Explicit endpoint URL override; when unset the regional endpoint is used.
    pub endpoint: Option<String>,
    /// When a guardrail call fails outright, report the text as not blocked
    /// (fail open, the historical default) or as blocked (fail closed).
    pub fail_open: bool,
}

impl ServiceConfig {
    /// Loads configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let guardrail_id = lookup("GUARDRAIL_ID").filter(|v| !v.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "GUARDRAIL_ID is not configured; add GUARDRAIL_ID=<your-guardrail-id> to the environment or .env file"
            )
        })?;

        let api_port = lookup("API_PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_API_PORT);

        let fail_open = lookup("GUARDRAIL_FAIL_OPEN")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        Ok(Self {
            region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            guardrail_id,
            guardrail_version: lookup("GUARDRAIL_VERSION")
                .unwrap_or_else(|| DEFAULT_GUARDRAIL_VERSION.to_string()),
            model_id: lookup("MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            api_host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            api_port,
            bearer_token: lookup("AWS_BEARER_TOKEN_BEDROCK"),
            endpoint: lookup("BEDROCK_ENDPOINT"),
            fail_open,
        })
    }
}

fn parse_bool(value: &str) -> bool {
    value.to_lowercase() == "true" || value == "1"
}
