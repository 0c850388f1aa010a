use dashboard_sync::prelude::*;
use std::collections::VecDeque;

/// Mock EventGenerator replaying a fixed script, then repeating the last draft
pub struct MockEventGenerator {
    script: VecDeque<EventDraft>,
    last: EventDraft,
}

impl MockEventGenerator {
    pub fn new(script: Vec<EventDraft>) -> Self {
        let last = script
            .last()
            .cloned()
            .unwrap_or_else(|| EventDraft::new(EventCategory::Signup, None, "New customer signed up"));
        Self {
            script: script.into(),
            last,
        }
    }
}

impl EventGenerator for MockEventGenerator {
    fn next_event(&mut self) -> EventDraft {
        self.script.pop_front().unwrap_or_else(|| self.last.clone())
    }
}
