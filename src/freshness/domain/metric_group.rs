use crate::shared::error::SyncError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for metric group names
const MAX_GROUP_NAME_LENGTH: usize = 64;

/// NewType wrapper for an independently fetched slice of the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MetricGroup(String);

impl MetricGroup {
    pub const DASHBOARD: &'static str = "dashboard";
    pub const SALES: &'static str = "sales";
    pub const SHIPPING: &'static str = "shipping";
    pub const PAYMENTS: &'static str = "payments";

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(SyncError::validation("Metric group name cannot be empty").into());
        }

        if name.len() > MAX_GROUP_NAME_LENGTH {
            return Err(SyncError::validation(format!(
                "Metric group name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_GROUP_NAME_LENGTH
            ))
            .into());
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(SyncError::validation(format!(
                "Metric group name '{}' contains invalid characters. Only lowercase letters, digits, hyphens and underscores are allowed.",
                name
            ))
            .into());
        }

        Ok(Self(name))
    }

    pub fn dashboard() -> Self {
        Self(Self::DASHBOARD.to_string())
    }

    pub fn sales() -> Self {
        Self(Self::SALES.to_string())
    }

    pub fn shipping() -> Self {
        Self(Self::SHIPPING.to_string())
    }

    pub fn payments() -> Self {
        Self(Self::PAYMENTS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MetricGroup {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl std::borrow::Borrow<str> for MetricGroup {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<MetricGroup> for String {
    fn from(group: MetricGroup) -> Self {
        group.0
    }
}
