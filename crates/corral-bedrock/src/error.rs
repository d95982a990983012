use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("{0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("AWS config error: {0}")]
    Config(String),
}
