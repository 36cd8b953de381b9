// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /api/check
//!
//! Moderation outcomes and provider failures come back as 200 with the
//! verdict encoded in the payload; only a malformed body produces a 400.

use super::support::{app_with, body_json, post_json, ScriptedRuntime};
use axum::http::StatusCode;
use guardrail_api::bedrock::{GuardrailOutput, PiiEntity, SensitiveInformationPolicyAssessment};
use guardrail_api::bedrock::GuardrailAssessment;
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_missing_text_field_returns_400() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let response = app.oneshot(post_json("/api/check", "{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing 'text' field");
}

#[tokio::test]
async fn test_allowed_text_returns_safe_verdict() {
    let app = app_with(Arc::new(ScriptedRuntime::allowing()));

    let response = app
        .oneshot(post_json("/api/check", r#"{"text": "xin chào"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["is_blocked"], false);
    assert_eq!(json["text"], "xin chào");
    assert_eq!(json["reasons"][0], "Nội dung an toàn");
}

#[tokio::test]
async fn test_blocked_text_still_returns_200() {
    let app = app_with(Arc::new(ScriptedRuntime::blocking("GUARDRAIL_INTERVENED")));

    let response = app
        .oneshot(post_json("/api/check", r#"{"text": "bad content"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["is_blocked"], true);
    assert_eq!(json["action"], "GUARDRAIL_INTERVENED");
    assert_eq!(json["reasons"][0], "Nội dung vi phạm chính sách guardrail");
}

#[tokio::test]
async fn test_masked_text_included_when_provider_redacts() {
    let mut runtime = ScriptedRuntime::blocking("GUARDRAIL_INTERVENED");
    runtime.assessments = vec![GuardrailAssessment {
        sensitive_information_policy: Some(SensitiveInformationPolicyAssessment {
            pii_entities: vec![PiiEntity {
                entity_type: Some("CREDIT_DEBIT_CARD_NUMBER".to_string()),
                action: Some("ANONYMIZED".to_string()),
            }],
            regexes: vec![],
        }),
        ..Default::default()
    }];
    runtime.outputs = vec![GuardrailOutput {
        text: "my card is {CREDIT_DEBIT_CARD_NUMBER}".to_string(),
    }];
    let app = app_with(Arc::new(runtime));

    let response = app
        .oneshot(post_json(
            "/api/check",
            r#"{"text": "my card is 4111-1111-1111-1111"}"#,
        ))
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["masked_text"], "my card is {CREDIT_DEBIT_CARD_NUMBER}");
    assert_eq!(
        json["reasons"][0],
        "Thông tin nhạy cảm (CREDIT_DEBIT_CARD_NUMBER): ANONYMIZED"
    );
}

#[tokio::test]
async fn test_provider_failure_returns_failure_payload_with_200() {
    let app = app_with(Arc::new(ScriptedRuntime::failing_guardrail()));

    let response = app
        .oneshot(post_json("/api/check", r#"{"text": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["is_blocked"], false);
    assert_eq!(json["error_type"], "InvalidResponse");
    assert!(json.get("action").is_none());
}
