use crate::freshness::domain::LiveEvent;
use crate::freshness::policies::EventPriorityPolicy;
use crate::freshness::services::EventBuffer;
use crate::ports::outbound::EventGenerator;
use crate::shared::error::SyncError;
use crate::shared::task::TaskHandle;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

/// Period of the simulated live-activity feed
pub const DEFAULT_FEED_INTERVAL: Duration = Duration::from_secs(5);

/// SimulatedEventFeed - synthetic live-activity widget data
///
/// Each tick draws one event from the generator, classifies its priority
/// and prepends it to a bounded buffer. Independent of the snapshot store.
///
/// # Type Parameters
/// * `G` - EventGenerator implementation
pub struct SimulatedEventFeed<G: EventGenerator> {
    generator: G,
    buffer: EventBuffer,
}

impl<G: EventGenerator> SimulatedEventFeed<G> {
    pub fn new(generator: G, capacity: usize) -> Result<Self> {
        Ok(Self {
            generator,
            buffer: EventBuffer::new(capacity)?,
        })
    }

    /// Produces one event stamped with `now`
    pub fn tick(&mut self, now: DateTime<Utc>) -> LiveEvent {
        let draft = self.generator.next_event();
        let priority = EventPriorityPolicy::classify(draft.category, draft.amount);
        let event = LiveEvent::from_draft(draft, priority, now);

        tracing::debug!(
            category = %event.category,
            priority = ?event.priority,
            "live event generated"
        );
        self.buffer.push(event.clone());
        event
    }

    /// Buffered events, newest first
    pub fn events(&self) -> Vec<LiveEvent> {
        self.buffer.to_vec()
    }

    pub fn buffer(&self) -> &EventBuffer {
        &self.buffer
    }
}

impl<G: EventGenerator + 'static> SimulatedEventFeed<G> {
    /// Runs the feed on a recurring timer, first tick one period from now
    pub fn start(mut self, period: Duration) -> Result<(TaskHandle, EventFeedReader)> {
        if period.is_zero() {
            return Err(SyncError::validation("Feed interval must be greater than zero").into());
        }

        let (events_tx, events_rx) = watch::channel(self.events());
        let task = TaskHandle::spawn("event-feed", move |mut stop| async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = stop.stopped() => break,
                    _ = ticker.tick() => {
                        self.tick(Utc::now());
                        events_tx.send_replace(self.events());
                    }
                }
            }
        });

        Ok((task, EventFeedReader { events: events_rx }))
    }
}

/// Read side of a running feed
#[derive(Debug, Clone)]
pub struct EventFeedReader {
    events: watch::Receiver<Vec<LiveEvent>>,
}

impl EventFeedReader {
    /// Current buffer contents, newest first
    pub fn latest(&self) -> Vec<LiveEvent> {
        self.events.borrow().clone()
    }

    /// Waits for the next tick. Returns false once the feed has stopped.
    pub async fn changed(&mut self) -> bool {
        self.events.changed().await.is_ok()
    }
}
