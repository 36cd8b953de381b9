// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Guardrail moderation facade
//!
//! `GuardrailService` orchestrates the two operations this service exposes:
//! checking text against the guardrail and running a guarded chat turn. The
//! `interpreter` module turns raw provider assessments into human-readable
//! reasons; `result` holds the payload types returned to HTTP callers.

pub mod interpreter;
pub mod result;
pub mod service;

pub use interpreter::{
    apply_default_reason, is_blocked, parse_assessments, DEFAULT_BLOCKED_REASON,
    DEFAULT_SAFE_REASON,
};
pub use result::{CheckResult, ChatResult};
pub use service::GuardrailService;
