use crate::application::dto::{CycleReport, FetchOutcome};
use crate::freshness::domain::{FetchScope, GroupEntry, MetricGroup, Snapshot, TimeRange};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

/// Result of writing one fetch outcome into the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    /// The outcome belongs to an older time-range scope and was dropped
    StaleScope,
    /// The store was torn down; the write was a no-op
    TornDown,
}

/// SnapshotStore - the only mutable state shared between coordinator parts
///
/// Holds the latest entry per metric group. Groups are replaced one at a
/// time and independently: a failure for one group never touches another,
/// and never drops a previously fetched payload. Writers are the fetch
/// orchestrator only; everyone else reads via `snapshot()` and learns about
/// new data through `subscribe()`.
pub struct SnapshotStore {
    groups: DashMap<MetricGroup, GroupEntry>,
    scope: RwLock<FetchScope>,
    offline: AtomicBool,
    torn_down: AtomicBool,
    revision: watch::Sender<u64>,
}

impl SnapshotStore {
    pub fn new(range: TimeRange) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            groups: DashMap::new(),
            scope: RwLock::new(FetchScope::initial(range)),
            offline: AtomicBool::new(false),
            torn_down: AtomicBool::new(false),
            revision,
        }
    }

    fn read_scope(&self) -> RwLockReadGuard<'_, FetchScope> {
        self.scope.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn current_scope(&self) -> FetchScope {
        *self.read_scope()
    }

    /// Starts a new time-range scope; results tagged with older scopes are
    /// rejected from now on
    pub fn begin_scope(&self, range: TimeRange) -> FetchScope {
        let next = {
            let mut scope = self.write_scope();
            *scope = scope.next(range);
            *scope
        };
        self.scope_entered(next);
        next
    }

    /// Selects a new time range. A no-op returning `None` when `range` is
    /// already the current one.
    ///
    /// Fresh entries of the `range_scoped` groups are demoted to stale until
    /// a cycle of the new scope writes them. When no group is range scoped
    /// the generation is kept, since no held or in-flight result depends on
    /// the range.
    pub fn switch_range(
        &self,
        range: TimeRange,
        range_scoped: &[MetricGroup],
    ) -> Option<FetchScope> {
        let next = {
            let mut scope = self.write_scope();
            if scope.range == range {
                return None;
            }
            if range_scoped.is_empty() {
                scope.range = range;
            } else {
                *scope = scope.next(range);
                // Under the scope lock, so no write of the new scope lands first.
                for group in range_scoped {
                    if let Some(mut entry) = self.groups.get_mut(group) {
                        entry.superseded();
                    }
                }
            }
            *scope
        };
        self.scope_entered(next);
        Some(next)
    }

    fn write_scope(&self) -> RwLockWriteGuard<'_, FetchScope> {
        self.scope
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn scope_entered(&self, scope: FetchScope) {
        tracing::debug!(
            generation = scope.generation,
            range = %scope.range,
            "snapshot store entered new scope"
        );
        self.bump_revision();
    }

    /// Writes one outcome, replacing only that outcome's group
    pub fn apply(&self, scope: FetchScope, outcome: &FetchOutcome) -> WriteOutcome {
        // Held across the write so a concurrent scope change cannot slip in
        // between the generation check and the insert.
        let current = self.read_scope();

        if self.is_torn_down() {
            return WriteOutcome::TornDown;
        }
        if scope.generation != current.generation {
            tracing::debug!(
                group = %outcome.name(),
                outcome_generation = scope.generation,
                current_generation = current.generation,
                "dropping result from superseded scope"
            );
            return WriteOutcome::StaleScope;
        }

        match outcome {
            FetchOutcome::Success {
                name,
                data,
                received_at,
            } => {
                self.groups.insert(
                    name.clone(),
                    GroupEntry::fresh(data.clone(), *received_at, scope.generation),
                );
            }
            FetchOutcome::Failure { name, error } => {
                self.groups
                    .entry(name.clone())
                    .and_modify(|entry| {
                        let next =
                            GroupEntry::after_failure(Some(&*entry), error.clone(), scope.generation);
                        *entry = next;
                    })
                    .or_insert_with(|| {
                        GroupEntry::after_failure(None, error.clone(), scope.generation)
                    });
            }
        }
        drop(current);

        self.bump_revision();
        WriteOutcome::Applied
    }

    /// Updates the offline banner from an accepted cycle
    pub fn record_cycle(&self, report: &CycleReport) {
        if !report.accepted || self.is_torn_down() {
            return;
        }
        let offline = !report.applied_success;
        let was_offline = self.offline.swap(offline, Ordering::SeqCst);
        if offline != was_offline {
            if offline {
                tracing::warn!("every group failed to refresh; showing cached data");
            } else {
                tracing::info!("data source reachable again");
            }
            self.bump_revision();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let range = self.current_scope().range;
        let groups: BTreeMap<MetricGroup, GroupEntry> = self
            .groups
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        Snapshot::from_entries(
            groups,
            self.offline.load(Ordering::SeqCst),
            *self.revision.borrow(),
            range,
        )
    }

    pub fn entry(&self, group: &str) -> Option<GroupEntry> {
        self.groups.get(group).map(|entry| entry.value().clone())
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Stops accepting writes. Data already held stays readable.
    pub fn tear_down(&self) {
        if !self.torn_down.swap(true, Ordering::SeqCst) {
            tracing::debug!("snapshot store torn down");
            self.bump_revision();
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(TimeRange::default())
    }
}
