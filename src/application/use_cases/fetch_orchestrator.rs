use crate::application::dto::{CycleReport, FetchOutcome};
use crate::application::store::{SnapshotStore, WriteOutcome};
use crate::freshness::domain::{FetchRequest, FetchScope, RefreshTrigger};
use crate::ports::outbound::DashboardDataSource;
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;

/// FetchOrchestrator - runs one fetch cycle
///
/// Issues every descriptor of the cycle concurrently, waits for all of them
/// to settle (never fail-fast), then writes each outcome into the snapshot
/// store group by group. A cycle never returns an error: a total failure is
/// reported as a cycle whose outcomes are all failures.
///
/// # Type Parameters
/// * `S` - DashboardDataSource implementation
pub struct FetchOrchestrator<S: DashboardDataSource + ?Sized> {
    source: Arc<S>,
    store: Arc<SnapshotStore>,
}

impl<S: DashboardDataSource + ?Sized> FetchOrchestrator<S> {
    pub fn new(source: Arc<S>, store: Arc<SnapshotStore>) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// Runs one cycle scoped to `scope`
    ///
    /// # Arguments
    /// * `trigger` - Why the cycle runs (logged and echoed in the report)
    /// * `scope` - Time-range scope captured when the cycle was launched
    /// * `requests` - Descriptors of the active view
    pub async fn run_cycle(
        &self,
        trigger: RefreshTrigger,
        scope: FetchScope,
        requests: &[FetchRequest],
    ) -> CycleReport {
        let started_at = Utc::now();
        tracing::debug!(
            trigger = %trigger,
            generation = scope.generation,
            range = %scope.range,
            requests = requests.len(),
            "fetch cycle started"
        );

        let outcomes: Vec<FetchOutcome> =
            join_all(requests.iter().map(|request| self.fetch_one(request))).await;

        let mut accepted = false;
        let mut applied_success = false;
        for outcome in &outcomes {
            match self.store.apply(scope, outcome) {
                WriteOutcome::Applied => {
                    accepted = true;
                    applied_success |= outcome.is_success();
                }
                WriteOutcome::StaleScope | WriteOutcome::TornDown => {}
            }
        }

        let report = CycleReport {
            trigger,
            scope,
            outcomes,
            started_at,
            finished_at: Utc::now(),
            accepted,
            applied_success,
        };
        self.store.record_cycle(&report);

        tracing::info!(
            trigger = %report.trigger,
            succeeded = report.succeeded_groups().len(),
            failed = report.failed_groups().len(),
            accepted = report.accepted,
            duration_ms = report.duration_ms(),
            "fetch cycle settled"
        );
        report
    }

    async fn fetch_one(&self, request: &FetchRequest) -> FetchOutcome {
        match self.source.fetch(request).await {
            Ok(data) => FetchOutcome::success(request.name.clone(), data),
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!(group = %request.name, error = %error, "group refresh failed");
                FetchOutcome::failure(request.name.clone(), error)
            }
        }
    }
}
