//! Credential validation via STS.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BedrockError;

/// Identity of the credentials in use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub account_id: String,
    pub arn: String,
    pub user_id: String,
}

/// Call STS GetCallerIdentity to validate credentials before invoking
/// Bedrock. The demos exit non-zero when this fails.
pub async fn validate_credentials(
    config: &aws_config::SdkConfig,
) -> Result<CallerIdentity, BedrockError> {
    let sts = aws_sdk_sts::Client::new(config);
    let resp = sts
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| BedrockError::Config(format!("STS GetCallerIdentity failed: {e}")))?;

    let identity = CallerIdentity {
        account_id: resp.account().unwrap_or_default().to_string(),
        arn: resp.arn().unwrap_or_default().to_string(),
        user_id: resp.user_id().unwrap_or_default().to_string(),
    };

    info!(account_id = %identity.account_id, "credentials validated");

    Ok(identity)
}
