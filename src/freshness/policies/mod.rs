pub mod event_priority;
pub mod view_requests;

pub use event_priority::{EventPriorityPolicy, HIGH_VALUE_SALE_THRESHOLD};
pub use view_requests::{View, DEFAULT_REFRESH_INTERVAL};
