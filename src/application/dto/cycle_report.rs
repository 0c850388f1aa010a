use super::FetchOutcome;
use crate::freshness::domain::{FetchScope, MetricGroup, RefreshTrigger};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one settled fetch cycle
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub trigger: RefreshTrigger,
    pub scope: FetchScope,
    pub outcomes: Vec<FetchOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// False when the store rejected the results (newer scope or torn down)
    pub accepted: bool,
    /// At least one outcome the store accepted was a success
    pub applied_success: bool,
}

impl CycleReport {
    /// Every request of a non-empty cycle failed (API host unreachable etc.)
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(|o| !o.is_success())
    }

    pub fn failed_groups(&self) -> Vec<&MetricGroup> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(FetchOutcome::name)
            .collect()
    }

    pub fn succeeded_groups(&self) -> Vec<&MetricGroup> {
        self.outcomes
            .iter()
            .filter(|o| o.is_success())
            .map(FetchOutcome::name)
            .collect()
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
