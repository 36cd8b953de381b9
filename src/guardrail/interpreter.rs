// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Verdict interpretation
//!
//! Pure functions that walk the provider's assessment records and produce an
//! ordered list of human-readable violation reasons, plus the blocked/allowed
//! classification of the overall verdict action. Absent sections and unknown
//! fields are never errors; with no assessment data this degrades to an empty
//! list.

use crate::bedrock::types::{GuardrailAssessment, ACTION_NONE};

/// Substituted when the verdict is blocked but no per-category reason exists.
pub const DEFAULT_BLOCKED_REASON: &str = "Nội dung vi phạm chính sách guardrail";

/// Substituted when the verdict is allowed and no reason was collected.
pub const DEFAULT_SAFE_REASON: &str = "Nội dung an toàn";

/// Verdict actions that mean the content was blocked. GUARDRAIL_INTERVENED
/// counts as blocked, same as an explicit BLOCK.
const BLOCKING_ACTIONS: &[&str] = &["BLOCK", "GUARDRAIL_INTERVENED"];

/// At most this many matched custom words are listed per reason.
const MAX_LISTED_WORDS: usize = 3;

/// Whether a verdict action means the content was blocked.
pub fn is_blocked(action: &str) -> bool {
    BLOCKING_ACTIONS.contains(&action)
}

/// Collects violation reasons from assessment records, in encounter order.
///
/// Only entries whose action is set and not `NONE` contribute, except custom
/// and managed word matches which the provider only reports when they fired.
pub fn parse_assessments(assessments: &[GuardrailAssessment]) -> Vec<String> {
    let mut reasons = Vec::new();

    for assessment in assessments {
        if let Some(policy) = &assessment.content_policy {
            for filter in &policy.filters {
                if let Some(action) = active_action(filter.action.as_deref()) {
                    let filter_type = filter.filter_type.as_deref().unwrap_or("Unknown");
                    let confidence = filter.confidence.as_deref().unwrap_or("N/A");
                    reasons.push(format!(
                        "Nội dung {filter_type}: {action} (Độ tin cậy: {confidence})"
                    ));
                }
            }
        }

        if let Some(policy) = &assessment.sensitive_information_policy {
            for entity in &policy.pii_entities {
                if let Some(action) = active_action(entity.action.as_deref()) {
                    let entity_type = entity.entity_type.as_deref().unwrap_or("Unknown");
                    reasons.push(format!("Thông tin nhạy cảm ({entity_type}): {action}"));
                }
            }
            for regex in &policy.regexes {
                if let Some(action) = active_action(regex.action.as_deref()) {
                    let name = regex.name.as_deref().unwrap_or("Unknown");
                    reasons.push(format!("Pattern nhạy cảm ({name}): {action}"));
                }
            }
        }

        if let Some(policy) = &assessment.word_policy {
            if !policy.custom_words.is_empty() {
                let mut word_list = policy
                    .custom_words
                    .iter()
                    .take(MAX_LISTED_WORDS)
                    .map(|word| word.matched.as_deref().unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(", ");
                if policy.custom_words.len() > MAX_LISTED_WORDS {
                    word_list.push_str("...");
                }
                reasons.push(format!("Từ bị cấm: {word_list}"));
            }

            if !policy.managed_word_lists.is_empty() {
                reasons.push(format!(
                    "Managed word list: {} vi phạm",
                    policy.managed_word_lists.len()
                ));
            }
        }

        if let Some(policy) = &assessment.topic_policy {
            for topic in &policy.topics {
                if active_action(topic.action.as_deref()).is_some() {
                    let name = topic.name.as_deref().unwrap_or("Unknown");
                    reasons.push(format!("Chủ đề vi phạm: {name}"));
                }
            }
        }
    }

    reasons
}

/// Never returns an empty reason list: substitutes a single default reason
/// matching the verdict when no per-category reason was collected.
pub fn apply_default_reason(blocked: bool, reasons: Vec<String>) -> Vec<String> {
    if !reasons.is_empty() {
        return reasons;
    }
    if blocked {
        vec![DEFAULT_BLOCKED_REASON.to_string()]
    } else {
        vec![DEFAULT_SAFE_REASON.to_string()]
    }
}

fn active_action(action: Option<&str>) -> Option<&str> {
    action.filter(|a| !a.is_empty() && *a != ACTION_NONE)
}
