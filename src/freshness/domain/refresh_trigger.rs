use super::TimeRange;
use serde::Serialize;

/// Reason a fetch cycle was started
///
/// Transient: consumed by the coordinator as soon as it arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RefreshTrigger {
    /// First load when the coordinator starts
    Initial,
    /// Recurring scheduler tick
    Interval,
    /// Server-sent signal on the push channel
    Push { signal: String },
    /// Explicit "refresh now" from the rendering layer
    Manual,
    /// Restart after the sales time range changed
    RangeChange { range: TimeRange },
}

impl RefreshTrigger {
    pub fn push(signal: impl Into<String>) -> Self {
        RefreshTrigger::Push {
            signal: signal.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RefreshTrigger::Initial => "initial",
            RefreshTrigger::Interval => "interval",
            RefreshTrigger::Push { .. } => "push",
            RefreshTrigger::Manual => "manual",
            RefreshTrigger::RangeChange { .. } => "range_change",
        }
    }
}

impl std::fmt::Display for RefreshTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTrigger::Push { signal } => write!(f, "push({})", signal),
            RefreshTrigger::RangeChange { range } => write!(f, "range_change({})", range),
            other => write!(f, "{}", other.kind()),
        }
    }
}
