//! Streaming delta relay.
//!
//! Turns the chunked event sequence of InvokeModelWithResponseStream into
//! plain text fragments. The relay is pull-based: dropping the returned
//! stream is the only cancellation mechanism, and nothing is retried or
//! resumed.

use std::fmt::Display;

use async_stream::stream;
use futures::{Stream, StreamExt, pin_mut};
use serde_json::Value;

use crate::classify::{GUARDRAIL_BLOCKED_MESSAGE, classify_failure};
use crate::provider::Provider;
use crate::response::ErrorKind;

/// Marker emitted in place of further content when a stream fails.
///
/// The streaming path has no structured return channel, so failures become
/// a single inline string.
pub(crate) fn error_marker(provider: Provider, message: &str) -> String {
    match classify_failure(provider, message) {
        ErrorKind::GuardrailIntervention => {
            format!("\n[ERROR: {GUARDRAIL_BLOCKED_MESSAGE}]\n")
        }
        _ => format!("\n[ERROR: {message}]\n"),
    }
}

/// Re-emit the text deltas of a chunked event stream.
///
/// Each item of `events` is the JSON payload of one stream event. Only
/// `content_block_delta` events carrying a `text_delta` produce output;
/// other event types are skipped. The first error (a failed read or an
/// unparseable payload) yields exactly one marker string and ends the
/// stream, with nothing after.
pub fn relay_deltas<S, E>(provider: Provider, events: S) -> impl Stream<Item = String>
where
    S: Stream<Item = Result<Vec<u8>, E>>,
    E: Display,
{
    stream! {
        pin_mut!(events);
        while let Some(event) = events.next().await {
            let bytes = match event {
                Ok(bytes) => bytes,
                Err(e) => {
                    yield error_marker(provider, &e.to_string());
                    return;
                }
            };

            let chunk: Value = match serde_json::from_slice(&bytes) {
                Ok(chunk) => chunk,
                Err(e) => {
                    yield error_marker(provider, &e.to_string());
                    return;
                }
            };

            if let Some(text) = delta_text(&chunk) {
                yield text.to_string();
            }
        }
    }
}

/// Text fragment of a `content_block_delta` event, if this is one.
fn delta_text(chunk: &Value) -> Option<&str> {
    if chunk.get("type").and_then(Value::as_str) != Some("content_block_delta") {
        return None;
    }

    let delta = chunk.get("delta")?;
    if delta.get("type").and_then(Value::as_str) != Some("text_delta") {
        return None;
    }

    delta.get("text").and_then(Value::as_str)
}
