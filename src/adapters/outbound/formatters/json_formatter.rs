use crate::freshness::domain::Snapshot;
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct SnapshotDocument<'a> {
    tool: Tool,
    generated_at: String,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
}

/// JsonFormatter adapter for machine-readable snapshot output
///
/// Emits the full snapshot (every group with payload, freshness and last
/// error) plus tool metadata, pretty-printed.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for JsonFormatter {
    fn format(&self, snapshot: &Snapshot) -> Result<String> {
        let document = SnapshotDocument {
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
            snapshot,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
