use crate::freshness::domain::EventDraft;

/// EventGenerator port for the simulated live-activity feed
///
/// Abstracts the source of randomness so the feed's buffering and priority
/// rules can be tested with scripted events.
pub trait EventGenerator: Send {
    /// Produces the next synthetic event
    fn next_event(&mut self) -> EventDraft;
}
