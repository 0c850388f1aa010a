use crate::shared::error::SyncError;
use crate::shared::security::validate_path_segment;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum length for gateway display names
const MAX_GATEWAY_NAME_LENGTH: usize = 100;

/// NewType wrapper for a gateway identifier used in request paths
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GatewayId(String);

impl GatewayId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_path_segment(&id, "Gateway id")?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GatewayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment gateway as listed by the admin API
///
/// Fields this client does not model are kept in `extra` so an update
/// round-trip never drops server data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentGateway {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating a gateway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPaymentGateway {
    pub name: String,
    pub provider: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl NewPaymentGateway {
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        enabled: bool,
        mode: Option<String>,
    ) -> Result<Self> {
        let gateway = Self {
            name: name.into().trim().to_string(),
            provider: provider.into().trim().to_lowercase(),
            enabled,
            mode,
        };
        validate_name(&gateway.name)?;
        if gateway.provider.is_empty() {
            return Err(SyncError::validation("Gateway provider cannot be empty").into());
        }
        if let Some(mode) = gateway.mode.as_deref() {
            validate_mode(mode)?;
        }
        Ok(gateway)
    }
}

/// Partial update for an existing gateway; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentGatewayUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl PaymentGatewayUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_none() && self.enabled.is_none() && self.mode.is_none() {
            return Err(SyncError::validation(
                "Gateway update must change at least one of: name, enabled, mode",
            )
            .into());
        }
        if let Some(name) = self.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(mode) = self.mode.as_deref() {
            validate_mode(mode)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SyncError::validation("Gateway name cannot be empty").into());
    }
    if name.len() > MAX_GATEWAY_NAME_LENGTH {
        return Err(SyncError::validation(format!(
            "Gateway name is too long ({} bytes). Maximum allowed: {} bytes",
            name.len(),
            MAX_GATEWAY_NAME_LENGTH
        ))
        .into());
    }
    Ok(())
}

fn validate_mode(mode: &str) -> Result<()> {
    match mode {
        "test" | "live" => Ok(()),
        other => Err(SyncError::validation(format!(
            "Invalid gateway mode: {}. Please specify 'test' or 'live'",
            other
        ))
        .into()),
    }
}
