//! Provider families addressed through the Bedrock InvokeModel API.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::request::GenerationRequest;

/// A supported model family.
///
/// Each variant carries its own request-body shape and response extraction
/// rule; everything else in the crate is provider-agnostic and dispatches
/// through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Claude,
    Mistral,
}

impl Provider {
    /// Default model ID used when no override is configured.
    pub fn default_model_id(self) -> &'static str {
        match self {
            Provider::Claude => "anthropic.claude-sonnet-4-20250514-v1:0",
            Provider::Mistral => "mistral.mistral-large-3-675b-instruct",
        }
    }

    /// Build the provider-shaped InvokeModel request body.
    ///
    /// Claude uses the message-style Anthropic schema; Mistral uses the flat
    /// prompt-style schema.
    pub fn request_body(self, request: &GenerationRequest) -> Value {
        match self {
            Provider::Claude => json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": request.max_tokens,
                "temperature": request.temperature,
                "top_p": request.top_p,
                "messages": [{ "role": "user", "content": request.prompt }],
            }),
            Provider::Mistral => json!({
                "prompt": request.prompt,
                "max_tokens": request.max_tokens,
                "temperature": request.temperature,
                "top_p": request.top_p,
            }),
        }
    }

    /// Extract the generated text from a parsed response body.
    ///
    /// Field paths are provider-specific and tried in order. Missing or
    /// malformed fields degrade to an empty string, never to an error.
    pub fn extract_text(self, body: &Value) -> String {
        match self {
            Provider::Claude => body
                .pointer("/content/0/text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Provider::Mistral => body
                .pointer("/outputs/0/text")
                .and_then(Value::as_str)
                .or_else(|| body.get("completion").and_then(Value::as_str))
                .unwrap_or_default()
                .to_string(),
        }
    }
}
