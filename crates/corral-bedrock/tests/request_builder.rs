use corral_bedrock::error::BedrockError;
use corral_bedrock::provider::Provider;
use corral_bedrock::request::{
    CONTENT_TYPE_JSON, GenerationRequest, GuardrailConfig, build_invoke_params,
};
use serde_json::Value;

fn request() -> GenerationRequest {
    GenerationRequest::new("What is the capital of France?")
}

#[test]
fn guardrail_pair_present_when_configured() {
    let guardrail = GuardrailConfig::new("gr-abc123", "2");
    let params = build_invoke_params(
        Provider::Claude,
        Provider::Claude.default_model_id(),
        &request(),
        Some(&guardrail),
    )
    .unwrap();

    let attached = params.guardrail.expect("guardrail should be attached");
    assert_eq!(attached.identifier, "gr-abc123");
    assert_eq!(attached.version, "2");
}

#[test]
fn guardrail_pair_absent_when_unconfigured() {
    let params = build_invoke_params(
        Provider::Mistral,
        Provider::Mistral.default_model_id(),
        &request(),
        None,
    )
    .unwrap();

    assert!(params.guardrail.is_none());
}

#[test]
fn zero_max_tokens_rejected_for_mistral() {
    let mut req = request();
    req.max_tokens = 0;

    let err = build_invoke_params(
        Provider::Mistral,
        Provider::Mistral.default_model_id(),
        &req,
        None,
    )
    .unwrap_err();

    assert!(matches!(err, BedrockError::Validation(_)));
}

#[test]
fn negative_max_tokens_rejected_for_claude() {
    let mut req = request();
    req.max_tokens = -5;

    let err = build_invoke_params(
        Provider::Claude,
        Provider::Claude.default_model_id(),
        &req,
        None,
    )
    .unwrap_err();

    assert!(matches!(err, BedrockError::Validation(_)));
}

#[test]
fn claude_body_is_message_style() {
    let params = build_invoke_params(
        Provider::Claude,
        Provider::Claude.default_model_id(),
        &request(),
        None,
    )
    .unwrap();

    let body: Value = serde_json::from_slice(&params.body).unwrap();
    assert_eq!(body["anthropic_version"], "bedrock-2023-05-31");
    assert_eq!(body["max_tokens"], 2000);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "What is the capital of France?");
    assert!(body.get("prompt").is_none());
}

#[test]
fn mistral_body_is_prompt_style() {
    let params = build_invoke_params(
        Provider::Mistral,
        Provider::Mistral.default_model_id(),
        &request(),
        None,
    )
    .unwrap();

    let body: Value = serde_json::from_slice(&params.body).unwrap();
    assert_eq!(body["prompt"], "What is the capital of France?");
    assert_eq!(body["max_tokens"], 2000);
    assert!(body.get("messages").is_none());
    assert!(body.get("anthropic_version").is_none());
}

#[test]
fn content_type_and_accept_are_json() {
    let params = build_invoke_params(
        Provider::Claude,
        Provider::Claude.default_model_id(),
        &request(),
        None,
    )
    .unwrap();

    assert_eq!(params.content_type, CONTENT_TYPE_JSON);
    assert_eq!(params.accept, CONTENT_TYPE_JSON);
}
