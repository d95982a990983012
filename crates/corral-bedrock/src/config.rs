//! Environment-sourced settings for the demo clients.

use std::env;

use crate::provider::Provider;
use crate::request::GuardrailConfig;

/// Settings resolved from the environment.
///
/// All fields are optional with stated defaults; nothing here validates
/// that the referenced AWS resources exist.
#[derive(Debug, Clone)]
pub struct Settings {
    /// AWS region, from `AWS_REGION` (default `eu-west-1`).
    pub region: String,
    /// Guardrail policy, from `GUARDRAIL_ID` plus `GUARDRAIL_VERSION`
    /// (version defaults to `1`).
    pub guardrail: Option<GuardrailConfig>,
    /// Claude inference-profile override, from `INFERENCE_PROFILE_ID`.
    pub inference_profile_id: Option<String>,
    /// Mistral model override, from `MODEL_ID`.
    pub model_id: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        let guardrail = env::var("GUARDRAIL_ID")
            .ok()
            .filter(|id| !id.is_empty())
            .map(|identifier| {
                let version = env::var("GUARDRAIL_VERSION").unwrap_or_else(|_| "1".to_string());
                GuardrailConfig::new(identifier, version)
            });

        Settings {
            region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            guardrail,
            inference_profile_id: env::var("INFERENCE_PROFILE_ID").ok(),
            model_id: env::var("MODEL_ID").ok(),
        }
    }

    /// Effective model ID for a provider, after overrides.
    pub fn model_id_for(&self, provider: Provider) -> String {
        let override_id = match provider {
            Provider::Claude => self.inference_profile_id.as_deref(),
            Provider::Mistral => self.model_id.as_deref(),
        };

        override_id
            .unwrap_or(provider.default_model_id())
            .to_string()
    }
}

/// Load the shared AWS config for the configured region, using the default
/// credential chain.
pub async fn build_aws_config(settings: &Settings) -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(settings.region.clone()))
        .load()
        .await
}
