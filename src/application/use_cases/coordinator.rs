use super::fetch_orchestrator::FetchOrchestrator;
use super::push_listener::PushListener;
use super::refresh_scheduler::{RefreshScheduler, SchedulerState};
use crate::application::store::SnapshotStore;
use crate::freshness::domain::{FetchScope, RefreshTrigger, Snapshot, TimeRange};
use crate::freshness::policies::View;
use crate::ports::inbound::RefreshPort;
use crate::ports::outbound::{DashboardDataSource, PushChannel};
use crate::shared::error::SyncError;
use crate::shared::task::{StopSignal, TaskHandle};
use crate::shared::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;

/// Settings of one mounted view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorSettings {
    pub view: View,
    pub time_range: TimeRange,
    pub refresh_interval: Duration,
    /// Run one cycle right away instead of waiting a full interval
    pub initial_fetch: bool,
}

impl CoordinatorSettings {
    pub fn new(view: View) -> Self {
        Self {
            view,
            time_range: TimeRange::default(),
            refresh_interval: view.refresh_interval(),
            initial_fetch: true,
        }
    }

    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = time_range;
        self
    }

    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    pub fn without_initial_fetch(mut self) -> Self {
        self.initial_fetch = false;
        self
    }
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self::new(View::default())
    }
}

/// DataFreshnessCoordinator - keeps one view's snapshot current
///
/// Wires the refresh scheduler, the optional push listener and the fetch
/// orchestrator to a snapshot store. All triggers funnel into a single
/// driver task which launches cycles without waiting for earlier ones, so
/// overlapping cycles are allowed and the last write per group wins. A
/// time-range change aborts in-flight cycles and starts a new scope whose
/// first cycle runs immediately.
pub struct DataFreshnessCoordinator;

impl DataFreshnessCoordinator {
    /// Mounts a view. Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if the refresh interval is zero
    pub fn start<S>(
        source: Arc<S>,
        push: Option<Arc<dyn PushChannel>>,
        store: Arc<SnapshotStore>,
        settings: CoordinatorSettings,
    ) -> Result<CoordinatorHandle>
    where
        S: DashboardDataSource + ?Sized + 'static,
    {
        let mut scheduler = RefreshScheduler::new(settings.refresh_interval)?;
        store.switch_range(settings.time_range, &settings.view.range_scoped_groups());

        let (trigger_tx, trigger_rx) = mpsc::unbounded_channel();
        let (range_tx, range_rx) = mpsc::unbounded_channel();

        if settings.initial_fetch {
            // Queued before the driver starts, so it is always the first cycle.
            let _ = trigger_tx.send(RefreshTrigger::Initial);
        }

        let orchestrator = Arc::new(FetchOrchestrator::new(source, store.clone()));
        let view = settings.view;
        let driver = TaskHandle::spawn("coordinator", move |stop| {
            drive(orchestrator, view, trigger_rx, range_rx, stop)
        });

        scheduler.start(trigger_tx.clone());
        let push_listener = push.map(|channel| PushListener::start(channel, trigger_tx.clone()));

        tracing::info!(
            view = %settings.view,
            range = %settings.time_range,
            interval_secs = settings.refresh_interval.as_secs_f64(),
            push = push_listener.is_some(),
            "view mounted"
        );

        Ok(CoordinatorHandle {
            view: settings.view,
            store,
            triggers: trigger_tx,
            range_changes: range_tx,
            scheduler,
            push_listener,
            driver: Some(driver),
        })
    }
}

async fn drive<S>(
    orchestrator: Arc<FetchOrchestrator<S>>,
    view: View,
    mut triggers: mpsc::UnboundedReceiver<RefreshTrigger>,
    mut range_changes: mpsc::UnboundedReceiver<FetchScope>,
    mut stop: StopSignal,
) where
    S: DashboardDataSource + ?Sized + 'static,
{
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            biased;
            _ = stop.stopped() => break,
            Some(scope) = range_changes.recv() => {
                if scope != orchestrator.store().current_scope() {
                    tracing::debug!(range = %scope.range, "range change superseded before it ran");
                    continue;
                }
                let aborted = in_flight.len();
                in_flight.abort_all();
                tracing::info!(range = %scope.range, aborted, "time range changed; restarting fetch cycle");
                launch(
                    &mut in_flight,
                    &orchestrator,
                    view,
                    RefreshTrigger::RangeChange { range: scope.range },
                    scope,
                );
            }
            Some(trigger) = triggers.recv() => {
                let scope = orchestrator.store().current_scope();
                launch(&mut in_flight, &orchestrator, view, trigger, scope);
            }
            Some(joined) = in_flight.join_next() => {
                if let Err(e) = joined {
                    if e.is_panic() {
                        tracing::error!("fetch cycle panicked: {}", e);
                    }
                }
            }
        }
    }

    // Left to finish on their own; the torn-down store turns their writes
    // into no-ops.
    in_flight.detach_all();
}

fn launch<S>(
    in_flight: &mut JoinSet<()>,
    orchestrator: &Arc<FetchOrchestrator<S>>,
    view: View,
    trigger: RefreshTrigger,
    scope: FetchScope,
) where
    S: DashboardDataSource + ?Sized + 'static,
{
    let requests = view.requests(scope.range);
    let orchestrator = Arc::clone(orchestrator);
    in_flight.spawn(async move {
        orchestrator.run_cycle(trigger, scope, &requests).await;
    });
}

/// Running coordinator for one mounted view
///
/// Implements [`RefreshPort`] for the rendering layer. `shutdown` is the
/// unmount: no trigger fires afterwards and the store accepts no further
/// writes. Dropping the handle without calling it aborts every task.
pub struct CoordinatorHandle {
    view: View,
    store: Arc<SnapshotStore>,
    triggers: mpsc::UnboundedSender<RefreshTrigger>,
    range_changes: mpsc::UnboundedSender<FetchScope>,
    scheduler: RefreshScheduler,
    push_listener: Option<TaskHandle>,
    driver: Option<TaskHandle>,
}

impl CoordinatorHandle {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// True while the push connection is up
    pub fn push_active(&self) -> bool {
        self.push_listener
            .as_ref()
            .is_some_and(|listener| listener.is_active())
    }

    fn ensure_running(&self) -> Result<()> {
        if self.store.is_torn_down() {
            return Err(SyncError::validation("Coordinator has been shut down").into());
        }
        Ok(())
    }

    /// Unmounts the view
    pub async fn shutdown(mut self) {
        self.scheduler.shutdown().await;
        if let Some(listener) = self.push_listener.take() {
            listener.shutdown().await;
        }
        if let Some(driver) = self.driver.take() {
            driver.shutdown().await;
        }
        self.store.tear_down();
        tracing::info!(view = %self.view, "view unmounted");
    }
}

impl RefreshPort for CoordinatorHandle {
    fn refresh_now(&self) -> Result<()> {
        self.ensure_running()?;
        self.triggers
            .send(RefreshTrigger::Manual)
            .map_err(|_| SyncError::validation("Coordinator is not running"))?;
        Ok(())
    }

    fn set_time_range(&self, range: TimeRange) -> Result<()> {
        self.ensure_running()?;
        let range_scoped = self.view.range_scoped_groups();
        match self.store.switch_range(range, &range_scoped) {
            None => {
                tracing::debug!(range = %range, "time range unchanged");
                Ok(())
            }
            Some(_) if range_scoped.is_empty() => {
                tracing::debug!(
                    view = %self.view,
                    range = %range,
                    "view does not depend on the time range; keeping current data"
                );
                Ok(())
            }
            Some(scope) => {
                self.range_changes
                    .send(scope)
                    .map_err(|_| SyncError::validation("Coordinator is not running"))?;
                Ok(())
            }
        }
    }

    fn time_range(&self) -> TimeRange {
        self.store.current_scope().range
    }

    fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }
}

impl Drop for CoordinatorHandle {
    fn drop(&mut self) {
        self.store.tear_down();
    }
}
