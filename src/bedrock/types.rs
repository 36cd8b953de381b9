// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Wire types for the Bedrock runtime API
//!
//! Every struct mirrors the provider's camelCase JSON. Assessment sections are
//! optional nested records: an absent section means no violation in that
//! category, never an error.

use serde::{Deserialize, Serialize};

/// Action sentinel the provider uses for "no violation" entries.
pub const ACTION_NONE: &str = "NONE";

/// Converse stop reason signalling that the guardrail blocked the output.
pub const STOP_REASON_GUARDRAIL_INTERVENED: &str = "guardrail_intervened";

// ---------------------------------------------------------------------------
// ApplyGuardrail
// ---------------------------------------------------------------------------

/// Request body for POST /guardrail/{id}/version/{version}/apply
#[derive(Debug, Clone, Serialize)]
pub struct ApplyGuardrailRequest {
    pub source: String,
    pub content: Vec<GuardrailContentBlock>,
}

impl ApplyGuardrailRequest {
    /// Builds a single-text request tagged as INPUT-source content.
    pub fn input(text: &str) -> Self {
        Self {
            source: "INPUT".to_string(),
            content: vec![GuardrailContentBlock {
                text: GuardrailTextBlock {
                    text: text.to_string(),
                },
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailContentBlock {
    pub text: GuardrailTextBlock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailTextBlock {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyGuardrailResponse {
    /// Overall verdict: ALLOW, BLOCK, GUARDRAIL_INTERVENED (or absent).
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default)]
    pub assessments: Vec<GuardrailAssessment>,
    /// Possibly-redacted variants of the input.
    #[serde(default)]
    pub outputs: Vec<GuardrailOutput>,
}

fn default_action() -> String {
    "UNKNOWN".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailOutput {
    #[serde(default)]
    pub text: String,
}

/// Per-category breakdown of a guardrail verdict.
///
/// Each of the four policy sections is independent and optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardrailAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_policy: Option<ContentPolicyAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive_information_policy: Option<SensitiveInformationPolicyAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_policy: Option<WordPolicyAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_policy: Option<TopicPolicyAssessment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPolicyAssessment {
    #[serde(default)]
    pub filters: Vec<ContentFilter>,
}

/// Content filter hit (Hate, Violence, Sexual, Insults, Misconduct).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFilter {
    #[serde(rename = "type", default)]
    pub filter_type: Option<String>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveInformationPolicyAssessment {
    #[serde(default)]
    pub pii_entities: Vec<PiiEntity>,
    #[serde(default)]
    pub regexes: Vec<RegexMatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PiiEntity {
    #[serde(rename = "type", default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegexMatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPolicyAssessment {
    #[serde(default)]
    pub custom_words: Vec<CustomWord>,
    #[serde(default)]
    pub managed_word_lists: Vec<ManagedWordList>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomWord {
    #[serde(rename = "match", default)]
    pub matched: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagedWordList {
    #[serde(rename = "match", default)]
    pub matched: Option<String>,
    #[serde(rename = "type", default)]
    pub list_type: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicPolicyAssessment {
    #[serde(default)]
    pub topics: Vec<TopicMatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicMatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

// ---------------------------------------------------------------------------
// Converse
// ---------------------------------------------------------------------------

/// Request body for POST /model/{modelId}/converse
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseRequest {
    pub messages: Vec<ConverseMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Vec<SystemContentBlock>>,
    pub inference_config: InferenceConfig,
    pub guardrail_config: GuardrailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverseMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

impl ConverseMessage {
    pub fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![ContentBlock::text(text)],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemContentBlock {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.7,
        }
    }
}

/// Inline guardrail attached to a Converse call; the provider enforces
/// output-side moderation during generation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardrailConfig {
    pub guardrail_identifier: String,
    pub guardrail_version: String,
    pub trace: String,
}

impl GuardrailConfig {
    pub fn new(guardrail_id: &str, guardrail_version: &str) -> Self {
        Self {
            guardrail_identifier: guardrail_id.to_string(),
            guardrail_version: guardrail_version.to_string(),
            trace: "enabled".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseResponse {
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub output: Option<ConverseOutput>,
}

impl ConverseResponse {
    /// First text block of the output message, if the model produced one.
    pub fn output_text(&self) -> Option<&str> {
        self.output
            .as_ref()?
            .message
            .as_ref()?
            .content
            .first()
            .map(|block| block.text.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConverseOutput {
    #[serde(default)]
    pub message: Option<OutputMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}
