//! Request construction for the Bedrock InvokeModel API.

use serde::{Deserialize, Serialize};

use crate::error::BedrockError;
use crate::provider::Provider;

/// Fixed content-type/accept value for InvokeModel calls.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// A single text-generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: f32,
}

impl GenerationRequest {
    /// A request with the default generation parameters
    /// (2000 tokens, temperature 0.7, top_p 0.9).
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: 2000,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Guardrail policy attached to an invocation.
///
/// The version is only meaningful alongside an identifier, so the pair is a
/// single type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailConfig {
    pub identifier: String,
    pub version: String,
}

impl GuardrailConfig {
    pub fn new(identifier: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            version: version.into(),
        }
    }
}

/// Fully assembled parameter set for one InvokeModel call.
#[derive(Debug, Clone)]
pub struct InvokeParams {
    pub model_id: String,
    /// Serialized provider-shaped JSON body.
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub accept: &'static str,
    pub guardrail: Option<GuardrailConfig>,
}

/// Assemble the InvokeModel parameter set for a request.
///
/// `max_tokens` is validated here, identically for every provider, so no
/// invalid request reaches the network. The guardrail identifier and version
/// are injected together or not at all. Temperature and top_p are passed
/// through uninterpreted; the service enforces its own ranges.
pub fn build_invoke_params(
    provider: Provider,
    model_id: &str,
    request: &GenerationRequest,
    guardrail: Option<&GuardrailConfig>,
) -> Result<InvokeParams, BedrockError> {
    if request.max_tokens <= 0 {
        return Err(BedrockError::Validation(
            "max_tokens must be a positive integer".to_string(),
        ));
    }

    let body = serde_json::to_vec(&provider.request_body(request))?;

    Ok(InvokeParams {
        model_id: model_id.to_string(),
        body,
        content_type: CONTENT_TYPE_JSON,
        accept: CONTENT_TYPE_JSON,
        guardrail: guardrail.cloned(),
    })
}
