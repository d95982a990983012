//! Mistral guardrail demo.
//!
//! Validates AWS credentials up front (exiting non-zero when they are
//! missing or invalid), then runs four queries against a Mistral model with
//! an optional guardrail.

use corral_bedrock::aws::validate_credentials;
use corral_bedrock::client::GuardrailClient;
use corral_bedrock::config::{Settings, build_aws_config};
use corral_bedrock::provider::Provider;
use corral_bedrock::request::GenerationRequest;
use corral_bedrock::response::GenerationResult;
use tracing_subscriber::EnvFilter;

use corral_demo::console;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    console::header("AWS Bedrock with Guardrails - Mistral Example");

    let settings = Settings::from_env();

    console::info("Configuration:");
    console::success(&format!("Region: {}", settings.region));
    console::success(&format!(
        "Model: {}",
        settings.model_id_for(Provider::Mistral)
    ));
    match &settings.guardrail {
        Some(g) => {
            console::success(&format!("Guardrail ID: {}", g.identifier));
            console::success(&format!("Guardrail Version: {}", g.version));
        }
        None => console::warning("No guardrail configured. Set GUARDRAIL_ID in the environment"),
    }

    let config = build_aws_config(&settings).await;

    if let Err(e) = validate_credentials(&config).await {
        console::error("AWS credentials not configured or invalid. Run 'aws configure' first.");
        return Err(eyre::eyre!(e));
    }
    console::success("AWS credentials validated");

    let client = GuardrailClient::new(&config, Provider::Mistral, &settings);

    run_example(
        &client,
        "Example 1: Safe Query",
        "What is the capital of France?",
        1000,
        0.7,
        0.9,
    )
    .await;

    run_example(
        &client,
        "Example 2: Query with PII (should be blocked/anonymized)",
        "My email is john.doe@example.com and my phone is (555) 123-4567. Can you help me?",
        1000,
        0.7,
        0.9,
    )
    .await;

    run_example(
        &client,
        "Example 3: Creative Query",
        "Write a short poem about technology and innovation.",
        1500,
        0.8,
        0.95,
    )
    .await;

    run_example(
        &client,
        "Example 4: Technical Query",
        "Explain the concept of machine learning in simple terms.",
        1000,
        0.5,
        0.9,
    )
    .await;

    console::header("Examples Completed!");
    Ok(())
}

async fn run_example(
    client: &GuardrailClient,
    title: &str,
    prompt: &str,
    max_tokens: i32,
    temperature: f32,
    top_p: f32,
) {
    console::subheader(title);
    console::info(&format!("Prompt: {prompt}"));
    println!();

    let request = GenerationRequest {
        prompt: prompt.to_string(),
        max_tokens,
        temperature,
        top_p,
    };
    let result = client.invoke(&request).await;

    if result.success {
        console::success("Response:");
        println!("{}", result.text.as_deref().unwrap_or_default());
        print_metadata(client, &result);
    } else {
        console::error(&format!(
            "Request failed: {}",
            result.message.as_deref().unwrap_or_default()
        ));
    }
}

fn print_metadata(client: &GuardrailClient, result: &GenerationResult) {
    println!();
    println!("Metadata:");
    if let Some(stop_reason) = &result.stop_reason {
        println!("  - Stop Reason: {stop_reason}");
    }
    println!("  - Model: {}", result.model_id);

    let guardrail_status = match (result.guardrail_applied, client.guardrail()) {
        (true, Some(g)) => format!("Yes ({})", g.identifier),
        (true, None) => "Yes".to_string(),
        (false, _) => "No".to_string(),
    };
    println!("  - Guardrail Applied: {guardrail_status}");
}
