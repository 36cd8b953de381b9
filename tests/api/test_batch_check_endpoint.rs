// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /api/batch-check

use super::support::{app_with, body_json, post_json, ScriptedRuntime};
use axum::http::StatusCode;
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_missing_texts_field_returns_400() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let response = app
        .oneshot(post_json("/api/batch-check", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing 'texts' array");
}

#[tokio::test]
async fn test_two_texts_give_two_results_in_order() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let response = app
        .oneshot(post_json("/api/batch-check", r#"{"texts": ["a", "b"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
    assert_eq!(json["results"][0]["text"], "a");
    assert_eq!(json["results"][1]["text"], "b");
}

#[tokio::test]
async fn test_empty_list_gives_empty_results() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let response = app
        .oneshot(post_json("/api/batch-check", r#"{"texts": []}"#))
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_failing_provider_yields_per_item_failures() {
    let app = app_with(Arc::new(ScriptedRuntime::failing_guardrail()));

    let response = app
        .oneshot(post_json("/api/batch-check", r#"{"texts": ["a", "b", "c"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 3);
    for result in json["results"].as_array().unwrap() {
        assert_eq!(result["success"], false);
        assert_eq!(result["error_type"], "InvalidResponse");
    }
}
