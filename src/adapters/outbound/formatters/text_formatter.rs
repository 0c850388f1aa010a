use crate::freshness::domain::{Freshness, LiveEvent, Priority, Snapshot};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Payload previews longer than this are cut off
const PREVIEW_WIDTH: usize = 72;

/// TextFormatter adapter for human-readable snapshot output
///
/// One line per group with its freshness badge, fetch time and a compact
/// payload preview (or the last error when there is no payload).
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Plain output without ANSI escapes (files, pipes, tests)
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn badge(&self, freshness: Freshness) -> String {
        let label = format!("{:<5}", freshness.as_str());
        if !self.color {
            return label;
        }
        match freshness {
            Freshness::Fresh => label.green().to_string(),
            Freshness::Stale => label.yellow().to_string(),
            Freshness::Error => label.red().to_string(),
        }
    }

    fn time(at: Option<DateTime<Utc>>) -> String {
        at.map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }

    fn preview(text: &str) -> String {
        if text.chars().count() <= PREVIEW_WIDTH {
            return text.to_string();
        }
        let cut: String = text.chars().take(PREVIEW_WIDTH - 1).collect();
        format!("{}…", cut)
    }

    /// One line of the live-activity feed
    pub fn format_event(&self, event: &LiveEvent) -> String {
        let priority = match event.priority {
            Priority::High if self.color => "HIGH".red().bold().to_string(),
            Priority::High => "HIGH".to_string(),
            Priority::Normal => "    ".to_string(),
        };
        format!(
            "[{}] {} {:<15} {}",
            event.occurred_at.format("%H:%M:%S"),
            priority,
            event.category.as_str(),
            event.message
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for TextFormatter {
    fn format(&self, snapshot: &Snapshot) -> Result<String> {
        let mut out = String::new();

        writeln!(
            out,
            "Dashboard snapshot (range {}, revision {})",
            snapshot.range, snapshot.revision
        )?;
        writeln!(
            out,
            "Status: {}  last updated {}",
            self.badge(snapshot.freshness),
            Self::time(snapshot.last_merged_at)
        )?;
        if snapshot.offline {
            let banner = "⚠️  Offline: every group failed to refresh, showing cached data";
            if self.color {
                writeln!(out, "{}", banner.yellow())?;
            } else {
                writeln!(out, "{}", banner)?;
            }
        }
        writeln!(out)?;

        if snapshot.is_empty() {
            writeln!(out, "  (no data yet)")?;
            return Ok(out);
        }

        for (name, entry) in &snapshot.groups {
            let detail = match (&entry.payload, &entry.last_error) {
                (Some(payload), Some(error)) => {
                    format!("{}  (last error: {})", Self::preview(&payload.to_string()), error)
                }
                (Some(payload), None) => Self::preview(&payload.to_string()),
                (None, Some(error)) => format!("error: {}", error),
                (None, None) => String::new(),
            };
            writeln!(
                out,
                "  {:<10} {} {}  {}",
                name.as_str(),
                self.badge(entry.freshness),
                Self::time(entry.fetched_at),
                detail
            )?;
        }

        Ok(out)
    }
}
