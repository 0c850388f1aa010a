use crate::freshness::domain::LiveEvent;
use crate::shared::error::SyncError;
use crate::shared::Result;
use std::collections::VecDeque;

/// Number of entries the live-activity widget keeps
pub const DEFAULT_EVENT_CAPACITY: usize = 10;

/// Fixed-capacity buffer keeping the newest N events, newest first
///
/// Inserting into a full buffer evicts the oldest entry (FIFO by arrival).
#[derive(Debug, Clone)]
pub struct EventBuffer {
    events: VecDeque<LiveEvent>,
    capacity: usize,
}

impl EventBuffer {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SyncError::validation("Event buffer capacity must be at least 1").into());
        }
        Ok(Self {
            events: VecDeque::with_capacity(capacity + 1),
            capacity,
        })
    }

    /// Prepends `event`, returning the evicted oldest entry if the cap was hit
    pub fn push(&mut self, event: LiveEvent) -> Option<LiveEvent> {
        self.events.push_front(event);
        if self.events.len() > self.capacity {
            self.events.pop_back()
        } else {
            None
        }
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &LiveEvent> {
        self.events.iter()
    }

    pub fn latest(&self) -> Option<&LiveEvent> {
        self.events.front()
    }

    pub fn to_vec(&self) -> Vec<LiveEvent> {
        self.events.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBuffer {
    fn default() -> Self {
        Self {
            events: VecDeque::with_capacity(DEFAULT_EVENT_CAPACITY + 1),
            capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
