//! corral-bedrock
//!
//! Bedrock model invocation with optional guardrails: request building,
//! response normalization, failure classification, and streaming relay.

pub mod aws;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod request;
pub mod response;
pub mod stream;
