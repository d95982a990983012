//! Claude guardrail demo.
//!
//! Runs three queries against a Claude model: a safe query, a PII query
//! that a configured guardrail should block or anonymize, and a streaming
//! query printed fragment by fragment.

use std::io::Write;

use corral_bedrock::client::GuardrailClient;
use corral_bedrock::config::{Settings, build_aws_config};
use corral_bedrock::provider::Provider;
use corral_bedrock::request::GenerationRequest;
use futures::{StreamExt, pin_mut};
use tracing_subscriber::EnvFilter;

use corral_demo::console;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    console::header("AWS Bedrock with Guardrails - Claude Example");

    let settings = Settings::from_env();
    let config = build_aws_config(&settings).await;
    let client = GuardrailClient::new(&config, Provider::Claude, &settings);

    match client.guardrail() {
        Some(g) => {
            console::success(&format!("Guardrail ID: {}", g.identifier));
            console::success(&format!("Guardrail Version: {}", g.version));
        }
        None => console::warning("No guardrail configured. Set GUARDRAIL_ID in the environment"),
    }
    match &settings.inference_profile_id {
        Some(profile) => console::success(&format!("Custom Inference Profile: {profile}")),
        None => console::success(&format!("Using default model: {}", client.model_id())),
    }

    console::subheader("Example 1: Safe Query");
    let prompt = "What is the capital of France?";
    console::info(&format!("Prompt: {prompt}"));
    println!();

    let result = client.invoke(&GenerationRequest::new(prompt)).await;
    if result.success {
        println!("Response: {}", result.text.as_deref().unwrap_or_default());
        println!();
        println!("Metadata:");
        println!(
            "  - Stop Reason: {}",
            result.stop_reason.as_deref().unwrap_or("None")
        );
        println!("  - Guardrail Applied: {}", result.guardrail_applied);
        if let Some(usage) = &result.usage {
            println!("  - Input Tokens: {}", usage.input_tokens);
            println!("  - Output Tokens: {}", usage.output_tokens);
        }
    } else {
        console::error(&format!(
            "Error: {}",
            result.message.as_deref().unwrap_or_default()
        ));
    }

    console::subheader("Example 2: Query with PII (should be blocked/anonymized)");
    let prompt = "My email is john.doe@example.com and my phone is 555-1234. Can you help me?";
    console::info(&format!("Prompt: {prompt}"));
    println!();

    let result = client.invoke(&GenerationRequest::new(prompt)).await;
    if result.success {
        println!("Response: {}", result.text.as_deref().unwrap_or_default());
    } else {
        console::error(&format!(
            "Blocked: {}",
            result.message.as_deref().unwrap_or_default()
        ));
        if let Some(details) = &result.raw_details {
            println!("Details: {details}");
        }
    }

    console::subheader("Example 3: Streaming Response");
    let prompt = "Write a short poem about technology.";
    console::info(&format!("Prompt: {prompt}"));
    println!();
    println!("Streaming Response:");
    println!();

    let deltas = client.invoke_streaming(GenerationRequest::new(prompt));
    pin_mut!(deltas);
    while let Some(fragment) = deltas.next().await {
        print!("{fragment}");
        std::io::stdout().flush()?;
    }
    println!();

    console::header("Examples completed!");
    Ok(())
}
