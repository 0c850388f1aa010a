use crate::shared::error::SyncError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::Value;

/// Response envelope returned by every admin API endpoint
///
/// `{ success: boolean, data?: payload, error?: string }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, alias = "message")]
    pub error: Option<String>,
}

impl ApiEnvelope {
    /// Unwraps the payload, treating `success: false` as a failure
    ///
    /// A successful envelope without `data` yields `Value::Null`.
    pub fn into_payload(self, endpoint: &str) -> Result<Value> {
        if !self.success {
            return Err(SyncError::ApiRejected {
                endpoint: endpoint.to_string(),
                message: self
                    .error
                    .unwrap_or_else(|| "request was not successful".to_string()),
            }
            .into());
        }
        Ok(self.data.unwrap_or(Value::Null))
    }
}
