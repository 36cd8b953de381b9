// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /api/chat

use super::support::{app_with, body_json, post_json, ScriptedRuntime};
use axum::http::StatusCode;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_missing_message_field_returns_400() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let response = app.oneshot(post_json("/api/chat", "{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing 'message' field");
}

#[tokio::test]
async fn test_allowed_message_gets_model_reply() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message": "Hello, how are you?"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["user_message"], "Hello, how are you?");
    assert_eq!(json["ai_response"], "Hello from the model");
    assert_eq!(json["is_safe"], true);
    assert_eq!(json["stop_reason"], "end_turn");
    assert_eq!(json["input_check"]["is_blocked"], false);
}

#[tokio::test]
async fn test_blocked_input_short_circuits_before_model() {
    let runtime = Arc::new(ScriptedRuntime::blocking("BLOCK"));
    let app = app_with(runtime.clone());

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message": "something terrible"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Tin nhắn của bạn bị chặn vì vi phạm chính sách nội dung"
    );
    assert_eq!(json["input_check"]["is_blocked"], true);
    assert!(json.get("ai_response").is_none());

    // The generative endpoint must never be invoked for a blocked input
    assert_eq!(runtime.converse_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_output_intervention_reported_as_output_block() {
    let mut runtime = ScriptedRuntime::allowing();
    runtime.stop_reason = Some("guardrail_intervened".to_string());
    let app = app_with(Arc::new(runtime));

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message": "hello"}"#))
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Phản hồi của AI bị chặn vì vi phạm chính sách nội dung"
    );
    assert_eq!(json["reasons"][0], "Output vi phạm guardrail");
    assert_eq!(json["stop_reason"], "guardrail_intervened");
    // Input phase passed, so its check is still embedded
    assert_eq!(json["input_check"]["success"], true);
}

#[tokio::test]
async fn test_converse_failure_returns_uniform_failure() {
    let mut runtime = ScriptedRuntime::allowing();
    runtime.fail_converse = true;
    let app = app_with(Arc::new(runtime));

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error_type"], "InvalidResponse");
}
