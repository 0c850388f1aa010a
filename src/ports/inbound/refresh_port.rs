use crate::freshness::domain::{Snapshot, TimeRange};
use crate::shared::Result;
use tokio::sync::watch;

/// RefreshPort - Inbound port exposed to the rendering layer
///
/// The renderer reads snapshots and is notified of new revisions through
/// `subscribe`; it never blocks the coordinator.
pub trait RefreshPort {
    /// Requests an immediate fetch cycle (`RefreshTrigger::Manual`)
    ///
    /// # Errors
    /// Returns an error if the coordinator has already been shut down
    fn refresh_now(&self) -> Result<()>;

    /// Switches the sales time range, restarting the cycle for the new range
    ///
    /// # Errors
    /// Returns an error if the coordinator has already been shut down
    fn set_time_range(&self, range: TimeRange) -> Result<()>;

    fn time_range(&self) -> TimeRange;

    fn snapshot(&self) -> Snapshot;

    /// Receiver whose value is the snapshot revision; changes on every write
    fn subscribe(&self) -> watch::Receiver<u64>;
}
