use super::{MetricGroup, TimeRange};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Freshness flag for a group or a whole snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    /// Refreshed successfully by the latest cycle that touched it
    Fresh,
    /// Latest refresh failed; the previous good payload is still shown
    Stale,
    /// Refresh failed and there is no previous payload to fall back on
    Error,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::Fresh => "fresh",
            Freshness::Stale => "stale",
            Freshness::Error => "error",
        }
    }
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Latest known state of one metric group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEntry {
    pub payload: Option<Value>,
    pub freshness: Freshness,
    /// When `payload` was fetched
    pub fetched_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    /// Scope generation `payload` was fetched under. For an entry without
    /// a payload, the generation of the failed cycle.
    pub scope_generation: u64,
}

impl GroupEntry {
    pub fn fresh(payload: Value, fetched_at: DateTime<Utc>, scope_generation: u64) -> Self {
        Self {
            payload: Some(payload),
            freshness: Freshness::Fresh,
            fetched_at: Some(fetched_at),
            last_error: None,
            scope_generation,
        }
    }

    /// Entry after a failed refresh. Never discards a previous payload.
    pub fn after_failure(prior: Option<&GroupEntry>, error: String, scope_generation: u64) -> Self {
        match prior.filter(|entry| entry.payload.is_some()) {
            Some(entry) => Self {
                payload: entry.payload.clone(),
                freshness: Freshness::Stale,
                fetched_at: entry.fetched_at,
                last_error: Some(error),
                scope_generation: entry.scope_generation,
            },
            None => Self {
                payload: None,
                freshness: Freshness::Error,
                fetched_at: None,
                last_error: Some(error),
                scope_generation,
            },
        }
    }

    /// Demotes a fresh entry whose payload no longer matches the selected
    /// time range. The payload is kept.
    pub fn superseded(&mut self) {
        if self.freshness == Freshness::Fresh {
            self.freshness = Freshness::Stale;
        }
    }

    pub fn has_data(&self) -> bool {
        self.payload.is_some()
    }
}

/// Point-in-time view of every group, as handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub groups: BTreeMap<MetricGroup, GroupEntry>,
    /// Most recent successful merge across all groups
    pub last_merged_at: Option<DateTime<Utc>>,
    pub freshness: Freshness,
    /// Every group failed in the latest accepted cycle
    pub offline: bool,
    pub revision: u64,
    pub range: TimeRange,
}

impl Snapshot {
    pub fn empty(range: TimeRange) -> Self {
        Self::from_entries(BTreeMap::new(), false, 0, range)
    }

    pub fn from_entries(
        groups: BTreeMap<MetricGroup, GroupEntry>,
        offline: bool,
        revision: u64,
        range: TimeRange,
    ) -> Self {
        let last_merged_at = groups.values().filter_map(|entry| entry.fetched_at).max();
        let freshness = Self::overall_freshness(&groups);

        Self {
            groups,
            last_merged_at,
            freshness,
            offline,
            revision,
            range,
        }
    }

    fn overall_freshness(groups: &BTreeMap<MetricGroup, GroupEntry>) -> Freshness {
        if groups.is_empty() {
            return Freshness::Stale;
        }
        if groups.values().all(|e| e.freshness == Freshness::Fresh) {
            return Freshness::Fresh;
        }
        let any_data = groups.values().any(GroupEntry::has_data);
        let any_error = groups.values().any(|e| e.freshness == Freshness::Error);
        if !any_data && any_error {
            Freshness::Error
        } else {
            Freshness::Stale
        }
    }

    pub fn group(&self, name: &str) -> Option<&GroupEntry> {
        self.groups.get(name)
    }

    pub fn payload(&self, name: &str) -> Option<&Value> {
        self.group(name).and_then(|entry| entry.payload.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(list: Vec<(MetricGroup, GroupEntry)>) -> BTreeMap<MetricGroup, GroupEntry> {
        list.into_iter().collect()
    }

    #[test]
    fn test_after_failure_retains_prior_payload() {
        let now = Utc::now();
        let prior = GroupEntry::fresh(json!({"revenue": 1200}), now, 0);
        let entry = GroupEntry::after_failure(Some(&prior), "timeout".to_string(), 0);

        assert_eq!(entry.freshness, Freshness::Stale);
        assert_eq!(entry.payload, Some(json!({"revenue": 1200})));
        assert_eq!(entry.fetched_at, Some(now));
        assert_eq!(entry.last_error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_after_failure_without_prior_is_error() {
        let entry = GroupEntry::after_failure(None, "503".to_string(), 2);
        assert_eq!(entry.freshness, Freshness::Error);
        assert!(entry.payload.is_none());
        assert_eq!(entry.scope_generation, 2);
    }

    #[test]
    fn test_after_repeated_failure_keeps_original_payload() {
        let prior = GroupEntry::fresh(json!([1, 2, 3]), Utc::now(), 0);
        let first = GroupEntry::after_failure(Some(&prior), "a".to_string(), 0);
        let second = GroupEntry::after_failure(Some(&first), "b".to_string(), 0);
        assert_eq!(second.payload, Some(json!([1, 2, 3])));
        assert_eq!(second.freshness, Freshness::Stale);
        assert_eq!(second.last_error.as_deref(), Some("b"));
    }

    #[test]
    fn test_after_failure_keeps_payload_generation() {
        let prior = GroupEntry::fresh(json!({"range": "30d"}), Utc::now(), 0);
        let entry = GroupEntry::after_failure(Some(&prior), "503".to_string(), 1);
        assert_eq!(entry.scope_generation, 0);
    }

    #[test]
    fn test_superseded_entry_is_stale_with_payload() {
        let mut entry = GroupEntry::fresh(json!([1]), Utc::now(), 0);
        entry.superseded();
        assert_eq!(entry.freshness, Freshness::Stale);
        assert_eq!(entry.payload, Some(json!([1])));
        assert!(entry.last_error.is_none());

        let mut failed = GroupEntry::after_failure(None, "down".to_string(), 0);
        failed.superseded();
        assert_eq!(failed.freshness, Freshness::Error);
    }

    #[test]
    fn test_empty_snapshot_is_stale() {
        let snapshot = Snapshot::empty(TimeRange::Month);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.freshness, Freshness::Stale);
        assert!(snapshot.last_merged_at.is_none());
    }

    #[test]
    fn test_all_fresh_snapshot() {
        let now = Utc::now();
        let snapshot = Snapshot::from_entries(
            entries(vec![
                (MetricGroup::dashboard(), GroupEntry::fresh(json!({}), now, 0)),
                (MetricGroup::sales(), GroupEntry::fresh(json!([]), now, 0)),
            ]),
            false,
            1,
            TimeRange::Month,
        );
        assert_eq!(snapshot.freshness, Freshness::Fresh);
        assert_eq!(snapshot.last_merged_at, Some(now));
    }

    #[test]
    fn test_mixed_snapshot_is_stale() {
        let snapshot = Snapshot::from_entries(
            entries(vec![
                (MetricGroup::dashboard(), GroupEntry::fresh(json!({}), Utc::now(), 0)),
                (
                    MetricGroup::sales(),
                    GroupEntry::after_failure(None, "down".to_string(), 0),
                ),
            ]),
            false,
            1,
            TimeRange::Month,
        );
        assert_eq!(snapshot.freshness, Freshness::Stale);
    }

    #[test]
    fn test_no_data_with_errors_is_error() {
        let snapshot = Snapshot::from_entries(
            entries(vec![(
                MetricGroup::shipping(),
                GroupEntry::after_failure(None, "down".to_string(), 0),
            )]),
            true,
            1,
            TimeRange::Month,
        );
        assert_eq!(snapshot.freshness, Freshness::Error);
        assert!(snapshot.offline);
    }

    #[test]
    fn test_last_merged_at_is_latest_fetch() {
        let earlier = Utc::now() - chrono::Duration::seconds(60);
        let later = Utc::now();
        let snapshot = Snapshot::from_entries(
            entries(vec![
                (MetricGroup::dashboard(), GroupEntry::fresh(json!({}), earlier, 0)),
                (MetricGroup::sales(), GroupEntry::fresh(json!({}), later, 0)),
            ]),
            false,
            3,
            TimeRange::Week,
        );
        assert_eq!(snapshot.last_merged_at, Some(later));
        assert_eq!(snapshot.payload("sales"), Some(&json!({})));
        assert!(snapshot.payload("payments").is_none());
    }
}
