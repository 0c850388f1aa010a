/// Snapshot Store - latest merged data for the rendering layer
mod snapshot_store;

pub use snapshot_store::{SnapshotStore, WriteOutcome};
