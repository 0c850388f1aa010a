use crate::freshness::domain::MetricGroup;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Settled result of one descriptor within a fetch cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchOutcome {
    Success {
        name: MetricGroup,
        data: Value,
        received_at: DateTime<Utc>,
    },
    Failure {
        name: MetricGroup,
        error: String,
    },
}

impl FetchOutcome {
    pub fn success(name: MetricGroup, data: Value) -> Self {
        FetchOutcome::Success {
            name,
            data,
            received_at: Utc::now(),
        }
    }

    pub fn failure(name: MetricGroup, error: impl Into<String>) -> Self {
        FetchOutcome::Failure {
            name,
            error: error.into(),
        }
    }

    pub fn name(&self) -> &MetricGroup {
        match self {
            FetchOutcome::Success { name, .. } | FetchOutcome::Failure { name, .. } => name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}
