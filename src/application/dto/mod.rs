/// Data Transfer Objects for application layer
///
/// DTOs carry fetch results between the use cases, the snapshot store and
/// the adapters, keeping the domain layer isolated.
mod cycle_report;
mod fetch_outcome;
mod fetch_snapshot;
mod output_format;

pub use cycle_report::CycleReport;
pub use fetch_outcome::FetchOutcome;
pub use fetch_snapshot::{FetchSnapshotRequest, FetchSnapshotResponse};
pub use output_format::OutputFormat;
