use crate::freshness::domain::{EventCategory, Priority};

/// Sale amount above which a sale is flagged high priority
pub const HIGH_VALUE_SALE_THRESHOLD: f64 = 300.0;

/// EventPriorityPolicy decides which live events are highlighted
///
/// High priority:
/// 1. every inventory alert
/// 2. sales strictly above [`HIGH_VALUE_SALE_THRESHOLD`]
pub struct EventPriorityPolicy;

impl EventPriorityPolicy {
    pub fn classify(category: EventCategory, amount: Option<f64>) -> Priority {
        match category {
            EventCategory::InventoryAlert => Priority::High,
            EventCategory::Sale if amount.is_some_and(|a| a > HIGH_VALUE_SALE_THRESHOLD) => {
                Priority::High
            }
            _ => Priority::Normal,
        }
    }
}
