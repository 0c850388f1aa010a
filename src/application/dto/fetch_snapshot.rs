use super::CycleReport;
use crate::freshness::domain::{Snapshot, TimeRange};
use crate::freshness::policies::View;

/// FetchSnapshotRequest - input of a one-shot fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchSnapshotRequest {
    pub view: View,
    pub time_range: TimeRange,
}

impl FetchSnapshotRequest {
    pub fn new(view: View, time_range: TimeRange) -> Self {
        Self { view, time_range }
    }
}

/// FetchSnapshotResponse - snapshot after a single cycle plus its report
#[derive(Debug, Clone)]
pub struct FetchSnapshotResponse {
    pub snapshot: Snapshot,
    pub report: CycleReport,
}

impl FetchSnapshotResponse {
    /// True when any group is missing data or failed on this cycle
    pub fn is_degraded(&self) -> bool {
        !self.report.failed_groups().is_empty()
    }
}
