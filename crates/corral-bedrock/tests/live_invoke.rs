//! Live end-to-end tests against real AWS Bedrock.
//!
//! These call the real InvokeModel API and require valid credentials in the
//! environment (e.g. `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`) plus
//! Bedrock model access in the configured region.
//!
//! Run with: `cargo test -p corral-bedrock --test live_invoke -- --ignored`

use corral_bedrock::client::GuardrailClient;
use corral_bedrock::config::{Settings, build_aws_config};
use corral_bedrock::provider::Provider;
use corral_bedrock::request::GenerationRequest;
use futures::{StreamExt, pin_mut};

#[tokio::test]
#[ignore]
async fn safe_query_succeeds_without_guardrail() {
    let mut settings = Settings::from_env();
    settings.guardrail = None;
    let config = build_aws_config(&settings).await;
    let client = GuardrailClient::new(&config, Provider::Claude, &settings);

    let mut request = GenerationRequest::new("What is the capital of France?");
    request.max_tokens = 1000;

    let result = client.invoke(&request).await;

    assert!(result.success, "expected success, got: {:?}", result.message);
    assert!(!result.guardrail_applied);
    assert!(
        result.text.as_deref().is_some_and(|t| !t.is_empty()),
        "expected non-empty text"
    );
}

#[tokio::test]
#[ignore]
async fn mistral_safe_query_succeeds() {
    let mut settings = Settings::from_env();
    settings.guardrail = None;
    let config = build_aws_config(&settings).await;
    let client = GuardrailClient::new(&config, Provider::Mistral, &settings);

    let result = client.invoke(&GenerationRequest::new("What is the capital of France?")).await;

    assert!(result.success, "expected success, got: {:?}", result.message);
    assert!(result.text.as_deref().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
#[ignore]
async fn streaming_query_yields_fragments() {
    let mut settings = Settings::from_env();
    settings.guardrail = None;
    let config = build_aws_config(&settings).await;
    let client = GuardrailClient::new(&config, Provider::Claude, &settings);

    let deltas = client.invoke_streaming(GenerationRequest::new(
        "Write a short poem about technology.",
    ));
    pin_mut!(deltas);

    let mut fragments = Vec::new();
    while let Some(fragment) = deltas.next().await {
        fragments.push(fragment);
    }

    assert!(!fragments.is_empty(), "expected at least one fragment");
    assert!(
        !fragments.iter().any(|f| f.starts_with("\n[ERROR:")),
        "expected no error marker, got: {fragments:?}"
    );
}
