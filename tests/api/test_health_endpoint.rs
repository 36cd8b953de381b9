// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests: health check, static frontend, method handling.

use super::support::{app_with, body_json, ScriptedRuntime};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "guardrail-api");
}

#[tokio::test]
async fn test_root_serves_frontend() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_check_rejects_get() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/check")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/unknown")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
