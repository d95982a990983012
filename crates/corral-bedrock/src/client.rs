//! Bedrock invocation with optional guardrails.

use async_stream::stream;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::ResponseStream;
use aws_smithy_types::Blob;
use aws_smithy_types::error::display::DisplayErrorContext;
use futures::{Stream, StreamExt, pin_mut};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Settings;
use crate::error::BedrockError;
use crate::provider::Provider;
use crate::request::{GenerationRequest, GuardrailConfig, InvokeParams, build_invoke_params};
use crate::response::{ErrorKind, GenerationResult, normalize};
use crate::stream::{error_marker, relay_deltas};

/// Client for one provider family on Bedrock, with optional guardrails.
pub struct GuardrailClient {
    runtime: Client,
    provider: Provider,
    model_id: String,
    guardrail: Option<GuardrailConfig>,
}

impl GuardrailClient {
    /// Build a client from the shared AWS config and environment settings.
    ///
    /// Claude invocations prefer the configured inference profile over the
    /// default model ID; Mistral invocations honor the `MODEL_ID` override.
    pub fn new(config: &aws_config::SdkConfig, provider: Provider, settings: &Settings) -> Self {
        Self {
            runtime: Client::new(config),
            provider,
            model_id: settings.model_id_for(provider),
            guardrail: settings.guardrail.clone(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn guardrail(&self) -> Option<&GuardrailConfig> {
        self.guardrail.as_ref()
    }

    /// Invoke the model and return a uniform result.
    ///
    /// Remote failures never escape as errors; they are classified and
    /// folded into the result. Local validation failures short-circuit
    /// before any network traffic.
    pub async fn invoke(&self, request: &GenerationRequest) -> GenerationResult {
        let guardrail_applied = self.guardrail.is_some();

        let params = match build_invoke_params(
            self.provider,
            &self.model_id,
            request,
            self.guardrail.as_ref(),
        ) {
            Ok(params) => params,
            Err(BedrockError::Validation(msg)) => {
                return GenerationResult::failure_with_kind(
                    ErrorKind::Validation,
                    &msg,
                    &self.model_id,
                    guardrail_applied,
                );
            }
            Err(e) => {
                return GenerationResult::failure_with_kind(
                    ErrorKind::Api,
                    &e.to_string(),
                    &self.model_id,
                    guardrail_applied,
                );
            }
        };

        let request_id = Uuid::new_v4();
        info!(
            request_id = %request_id,
            model_id = %params.model_id,
            guardrail = guardrail_applied,
            "invoking model"
        );

        match self.send_invoke(&params).await {
            Ok(body) => {
                info!(request_id = %request_id, "invocation complete");
                normalize(self.provider, &body, &self.model_id, guardrail_applied)
            }
            Err(message) => {
                warn!(request_id = %request_id, error = %message, "invocation failed");
                GenerationResult::failure(self.provider, &message, &self.model_id, guardrail_applied)
            }
        }
    }

    /// One InvokeModel round trip: send, read the body, parse JSON.
    /// All failure modes collapse to their full error-chain text.
    async fn send_invoke(&self, params: &InvokeParams) -> Result<Value, String> {
        let response = self
            .runtime
            .invoke_model()
            .model_id(&params.model_id)
            .body(Blob::new(params.body.clone()))
            .content_type(params.content_type)
            .accept(params.accept)
            .set_guardrail_identifier(params.guardrail.as_ref().map(|g| g.identifier.clone()))
            .set_guardrail_version(params.guardrail.as_ref().map(|g| g.version.clone()))
            .send()
            .await
            .map_err(|e| DisplayErrorContext(&e).to_string())?;

        serde_json::from_slice(response.body().as_ref()).map_err(|e| e.to_string())
    }

    /// Invoke the model with a streaming response, yielding text deltas.
    ///
    /// Delta parsing follows the Anthropic chunk schema
    /// (`content_block_delta` / `text_delta`). Any failure, whether from
    /// parameter validation, the initial call, or a mid-stream fault,
    /// appears as a single inline marker string, since the stream has no
    /// structured error channel.
    pub fn invoke_streaming(
        &self,
        request: GenerationRequest,
    ) -> impl Stream<Item = String> + '_ {
        stream! {
            let params = match build_invoke_params(
                self.provider,
                &self.model_id,
                &request,
                self.guardrail.as_ref(),
            ) {
                Ok(params) => params,
                Err(e) => {
                    yield error_marker(self.provider, &e.to_string());
                    return;
                }
            };

            let request_id = Uuid::new_v4();
            info!(
                request_id = %request_id,
                model_id = %params.model_id,
                guardrail = params.guardrail.is_some(),
                "invoking model with response stream"
            );

            let output = match self
                .runtime
                .invoke_model_with_response_stream()
                .model_id(&params.model_id)
                .body(Blob::new(params.body.clone()))
                .content_type(params.content_type)
                .accept(params.accept)
                .set_guardrail_identifier(params.guardrail.as_ref().map(|g| g.identifier.clone()))
                .set_guardrail_version(params.guardrail.as_ref().map(|g| g.version.clone()))
                .send()
                .await
            {
                Ok(output) => output,
                Err(e) => {
                    let message = DisplayErrorContext(&e).to_string();
                    warn!(request_id = %request_id, error = %message, "streaming invocation failed");
                    yield error_marker(self.provider, &message);
                    return;
                }
            };

            let mut receiver = output.body;
            let events = stream! {
                loop {
                    match receiver.recv().await {
                        Ok(Some(ResponseStream::Chunk(part))) => {
                            let bytes = part
                                .bytes()
                                .map(|b| b.clone().into_inner())
                                .unwrap_or_default();
                            yield Ok(bytes);
                        }
                        Ok(Some(_)) => {}
                        Ok(None) => break,
                        Err(e) => {
                            yield Err(DisplayErrorContext(&e).to_string());
                            break;
                        }
                    }
                }
            };

            let deltas = relay_deltas(self.provider, events);
            pin_mut!(deltas);
            while let Some(fragment) = deltas.next().await {
                yield fragment;
            }
        }
    }
}
