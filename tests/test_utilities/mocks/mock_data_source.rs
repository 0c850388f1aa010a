use anyhow::anyhow;
use async_trait::async_trait;
use dashboard_sync::prelude::*;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Mock DashboardDataSource for coordinator tests
///
/// Succeeds with `{"group", "range", "call"}` unless the group is marked as
/// failing. Responses for a range can be delayed to simulate slow requests.
#[derive(Default)]
pub struct MockDataSource {
    failing: Mutex<HashSet<String>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_group(&self, group: &str) {
        self.failing.lock().unwrap().insert(group.to_string());
    }

    pub fn recover_group(&self, group: &str) {
        self.failing.lock().unwrap().remove(group);
    }

    /// Delays every request scoped to `range`
    pub fn delay_range(&self, range: TimeRange, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(range.as_str().to_string(), delay);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, group: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == group)
            .count()
    }

    pub fn ranges_requested(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(_, range)| range.clone())
            .collect()
    }
}

#[async_trait]
impl DashboardDataSource for MockDataSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Value> {
        let group = request.name.as_str().to_string();
        let range = request.range().map(str::to_string);
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((group.clone(), range.clone()));
            calls.len()
        };

        let delay = range
            .as_ref()
            .and_then(|range| self.delays.lock().unwrap().get(range).copied());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().unwrap().contains(&group) {
            return Err(anyhow!("HTTP 503 from {}", request.endpoint.path()));
        }
        Ok(json!({ "group": group, "range": range, "call": call }))
    }
}
