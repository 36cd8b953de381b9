// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/batch-check — sequential multi-text check.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::batch_check_handler;
pub use request::BatchCheckRequest;
pub use response::BatchCheckResponse;
