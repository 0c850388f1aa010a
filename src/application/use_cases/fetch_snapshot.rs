use super::fetch_orchestrator::FetchOrchestrator;
use crate::application::dto::{FetchOutcome, FetchSnapshotRequest, FetchSnapshotResponse};
use crate::application::store::SnapshotStore;
use crate::freshness::domain::RefreshTrigger;
use crate::ports::outbound::{DashboardDataSource, ProgressReporter};
use std::sync::Arc;

/// FetchSnapshotUseCase - runs exactly one fetch cycle and returns the result
///
/// Backs the `fetch` command: no scheduler, no push channel, just one
/// manual cycle against a fresh store.
///
/// # Type Parameters
/// * `S` - DashboardDataSource implementation
/// * `PR` - ProgressReporter implementation
pub struct FetchSnapshotUseCase<S: DashboardDataSource + ?Sized, PR> {
    source: Arc<S>,
    progress_reporter: PR,
}

impl<S, PR> FetchSnapshotUseCase<S, PR>
where
    S: DashboardDataSource + ?Sized,
    PR: ProgressReporter,
{
    pub fn new(source: Arc<S>, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes one cycle for the requested view and range
    ///
    /// Per-group failures are part of the response, never an error.
    pub async fn execute(&self, request: FetchSnapshotRequest) -> FetchSnapshotResponse {
        let store = Arc::new(SnapshotStore::new(request.time_range));
        let orchestrator = FetchOrchestrator::new(Arc::clone(&self.source), Arc::clone(&store));
        let requests = request.view.requests(request.time_range);

        self.progress_reporter.report(&format!(
            "🔄 Fetching {} group(s) for the {} view ({})",
            requests.len(),
            request.view,
            request.time_range
        ));

        let report = orchestrator
            .run_cycle(RefreshTrigger::Manual, store.current_scope(), &requests)
            .await;

        for outcome in &report.outcomes {
            if let FetchOutcome::Failure { name, error } = outcome {
                self.progress_reporter
                    .report_error(&format!("⚠️  {}: {}", name, error));
            }
        }

        let succeeded = report.succeeded_groups().len();
        self.progress_reporter
            .report_progress(succeeded, requests.len(), Some("group(s) refreshed"));
        if report.all_failed() {
            self.progress_reporter
                .report_error("❌ No group could be refreshed; is the API reachable?");
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ {}/{} group(s) refreshed",
                succeeded,
                requests.len()
            ));
        }

        FetchSnapshotResponse {
            snapshot: store.snapshot(),
            report,
        }
    }
}
