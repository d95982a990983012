//! Failure classification for Bedrock invocation errors.
//!
//! InvokeModel does not expose a typed guardrail-intervention error, so the
//! only signal is the error text itself. The substring heuristic lives here
//! and nowhere else, so a structured check can replace it without touching
//! callers.

use crate::provider::Provider;
use crate::response::ErrorKind;

/// Fixed user-facing message for a guardrail-blocked request.
pub const GUARDRAIL_BLOCKED_MESSAGE: &str =
    "The request was blocked by guardrails. Please rephrase your question.";

/// Classify a failed invocation from its error text.
///
/// `GuardrailIntervened` (exact case) or `guardrail` (any case) anywhere in
/// the message marks a guardrail intervention. Mistral invocations also fold
/// the service's `ValidationException` into the same bucket, since Bedrock
/// reports guardrail-rejected prompt-style payloads that way. Everything
/// else is a generic API failure.
pub fn classify_failure(provider: Provider, message: &str) -> ErrorKind {
    if message.contains("GuardrailIntervened") || message.to_lowercase().contains("guardrail") {
        return ErrorKind::GuardrailIntervention;
    }

    if provider == Provider::Mistral && message.contains("ValidationException") {
        return ErrorKind::GuardrailIntervention;
    }

    ErrorKind::Api
}
