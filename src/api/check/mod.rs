// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/check — single guardrail check.

pub mod handler;
pub mod request;

pub use handler::check_handler;
pub use request::CheckRequest;
