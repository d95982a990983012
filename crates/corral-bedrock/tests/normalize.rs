use corral_bedrock::provider::Provider;
use corral_bedrock::response::{TokenUsage, normalize};
use serde_json::json;

#[test]
fn claude_text_from_content_block() {
    let body = json!({
        "content": [{"type": "text", "text": "Paris is the capital of France."}],
        "stop_reason": "end_turn",
        "model": "claude-sonnet-4-20250514",
        "usage": {"input_tokens": 12, "output_tokens": 8}
    });

    let result = normalize(Provider::Claude, &body, "anthropic.claude-sonnet-4-20250514-v1:0", false);

    assert!(result.success);
    assert_eq!(result.text.as_deref(), Some("Paris is the capital of France."));
    assert_eq!(result.stop_reason.as_deref(), Some("end_turn"));
    assert_eq!(
        result.usage,
        Some(TokenUsage {
            input_tokens: 12,
            output_tokens: 8
        })
    );
    assert_eq!(result.model_id, "claude-sonnet-4-20250514");
    assert!(!result.guardrail_applied);
    assert!(result.error_kind.is_none());
}

#[test]
fn mistral_prefers_outputs_over_completion() {
    let body = json!({
        "outputs": [{"text": "from outputs"}],
        "completion": "from completion"
    });

    let result = normalize(Provider::Mistral, &body, "mistral.mistral-large-3-675b-instruct", false);
    assert_eq!(result.text.as_deref(), Some("from outputs"));
}

#[test]
fn mistral_falls_back_to_completion() {
    let body = json!({"completion": "from completion"});

    let result = normalize(Provider::Mistral, &body, "mistral.mistral-large-3-675b-instruct", false);
    assert_eq!(result.text.as_deref(), Some("from completion"));
}

#[test]
fn missing_fields_degrade_to_empty_text() {
    let body = json!({});

    let result = normalize(Provider::Mistral, &body, "mistral.mistral-large-3-675b-instruct", true);

    assert!(result.success);
    assert_eq!(result.text.as_deref(), Some(""));
    assert!(result.stop_reason.is_none());
    assert!(result.usage.is_none());
    assert_eq!(result.model_id, "mistral.mistral-large-3-675b-instruct");
    assert!(result.guardrail_applied);
}

#[test]
fn malformed_content_degrades_to_empty_text() {
    let body = json!({"content": "not an array"});

    let result = normalize(Provider::Claude, &body, "anthropic.claude-sonnet-4-20250514-v1:0", false);

    assert!(result.success);
    assert_eq!(result.text.as_deref(), Some(""));
}

#[test]
fn partial_usage_degrades_to_none() {
    let body = json!({
        "content": [{"type": "text", "text": "hi"}],
        "usage": {"input_tokens": 3}
    });

    let result = normalize(Provider::Claude, &body, "anthropic.claude-sonnet-4-20250514-v1:0", false);
    assert!(result.usage.is_none());
}

#[test]
fn normalization_is_idempotent() {
    let body = json!({
        "outputs": [{"text": "stable output"}],
        "stop_reason": "stop"
    });

    let first = normalize(Provider::Mistral, &body, "mistral.mistral-large-3-675b-instruct", true);
    let second = normalize(Provider::Mistral, &body, "mistral.mistral-large-3-675b-instruct", true);

    assert_eq!(first, second);
}
