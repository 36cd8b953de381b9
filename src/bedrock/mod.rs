// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Amazon Bedrock runtime client
//!
//! Thin wrapper over the two Bedrock runtime operations this service uses:
//! ApplyGuardrail (content moderation) and Converse (guarded chat). The
//! request/response schema here is owned by the provider, not by us.

pub mod client;
pub mod types;

pub use client::{BedrockClient, BedrockError, BedrockRuntime};
pub use types::{
    ApplyGuardrailRequest, ApplyGuardrailResponse, ContentBlock, ContentFilter,
    ContentPolicyAssessment, ConverseMessage, ConverseOutput, ConverseRequest, ConverseResponse,
    CustomWord, GuardrailAssessment, GuardrailConfig, GuardrailContentBlock, GuardrailOutput,
    GuardrailTextBlock, InferenceConfig, ManagedWordList, OutputMessage, PiiEntity, RegexMatch,
    SensitiveInformationPolicyAssessment, SystemContentBlock, TopicMatch, TopicPolicyAssessment,
    WordPolicyAssessment, ACTION_NONE, STOP_REASON_GUARDRAIL_INTERVENED,
};
