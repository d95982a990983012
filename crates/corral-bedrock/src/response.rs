//! Uniform result record and provider-dispatched response normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classify::{GUARDRAIL_BLOCKED_MESSAGE, classify_failure};
use crate::provider::Provider;

/// Token counts reported by the service for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Failure category for an unsuccessful invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A local parameter check failed; the request never left the process.
    Validation,
    /// The remote safety policy blocked the request.
    GuardrailIntervention,
    /// Any other remote failure.
    Api,
}

/// Uniform outcome of one invocation, success or failure.
///
/// When `success` is false, `error_kind` and `message` are set and `text` is
/// absent. When `success` is true, `text` is present (possibly empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub text: Option<String>,
    pub stop_reason: Option<String>,
    pub usage: Option<TokenUsage>,
    pub model_id: String,
    pub guardrail_applied: bool,
    pub error_kind: Option<ErrorKind>,
    pub message: Option<String>,
    /// Serialized response body on success, raw error text on failure.
    pub raw_details: Option<String>,
}

impl GenerationResult {
    /// Package a classified failure.
    ///
    /// The error text is run through [`classify_failure`]; guardrail
    /// interventions carry the fixed rephrase message, everything else
    /// surfaces the raw text. `raw_details` always retains the original
    /// message for diagnostics.
    pub fn failure(
        provider: Provider,
        message: &str,
        model_id: &str,
        guardrail_applied: bool,
    ) -> Self {
        let kind = classify_failure(provider, message);
        Self::failure_with_kind(kind, message, model_id, guardrail_applied)
    }

    /// A failure with a known kind, bypassing classification.
    pub fn failure_with_kind(
        kind: ErrorKind,
        message: &str,
        model_id: &str,
        guardrail_applied: bool,
    ) -> Self {
        let user_message = match kind {
            ErrorKind::GuardrailIntervention => GUARDRAIL_BLOCKED_MESSAGE.to_string(),
            _ => message.to_string(),
        };

        GenerationResult {
            success: false,
            text: None,
            stop_reason: None,
            usage: None,
            model_id: model_id.to_string(),
            guardrail_applied,
            error_kind: Some(kind),
            message: Some(user_message),
            raw_details: Some(message.to_string()),
        }
    }
}

/// Normalize a parsed InvokeModel response body into a [`GenerationResult`].
///
/// Text extraction is dispatched on the provider; missing or malformed
/// fields degrade to empty text or `None`, never to an error. Normalizing
/// the same body twice yields identical results.
pub fn normalize(
    provider: Provider,
    body: &Value,
    model_id: &str,
    guardrail_applied: bool,
) -> GenerationResult {
    let text = provider.extract_text(body);

    let stop_reason = body
        .get("stop_reason")
        .and_then(Value::as_str)
        .map(str::to_string);

    let usage = body.get("usage").and_then(|u| {
        Some(TokenUsage {
            input_tokens: u.get("input_tokens")?.as_u64()?,
            output_tokens: u.get("output_tokens")?.as_u64()?,
        })
    });

    // The Anthropic shape echoes the effective model ID; the Mistral shape
    // has no such field, so fall back to the requested one.
    let model_id = body
        .get("model")
        .and_then(Value::as_str)
        .unwrap_or(model_id)
        .to_string();

    GenerationResult {
        success: true,
        text: Some(text),
        stop_reason,
        usage,
        model_id,
        guardrail_applied,
        error_kind: None,
        message: None,
        raw_details: Some(body.to_string()),
    }
}
