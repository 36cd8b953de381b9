// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/chat — guarded chat turn.

pub mod handler;
pub mod request;

pub use handler::chat_handler;
pub use request::ChatRequest;
