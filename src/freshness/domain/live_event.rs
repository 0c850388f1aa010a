use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Categories produced by the simulated live-activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Sale,
    Signup,
    Order,
    InventoryAlert,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Sale,
        EventCategory::Signup,
        EventCategory::Order,
        EventCategory::InventoryAlert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Sale => "sale",
            EventCategory::Signup => "signup",
            EventCategory::Order => "order",
            EventCategory::InventoryAlert => "inventory-alert",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Normal,
}

/// Raw event from a generator, before the feed stamps identity and priority
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub category: EventCategory,
    pub amount: Option<f64>,
    pub message: String,
}

impl EventDraft {
    pub fn new(category: EventCategory, amount: Option<f64>, message: impl Into<String>) -> Self {
        Self {
            category,
            amount,
            message: message.into(),
        }
    }
}

/// One entry of the live-activity widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveEvent {
    pub id: Uuid,
    pub category: EventCategory,
    pub amount: Option<f64>,
    pub message: String,
    pub priority: Priority,
    pub occurred_at: DateTime<Utc>,
}

impl LiveEvent {
    pub fn from_draft(draft: EventDraft, priority: Priority, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: draft.category,
            amount: draft.amount,
            message: draft.message,
            priority,
            occurred_at,
        }
    }
}
