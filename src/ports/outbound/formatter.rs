use crate::freshness::domain::Snapshot;
use crate::shared::Result;

/// SnapshotFormatter port for rendering a snapshot as text
///
/// This port abstracts the output format (coloured text, JSON, etc.).
pub trait SnapshotFormatter {
    /// Formats the snapshot
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, snapshot: &Snapshot) -> Result<String>;
}
