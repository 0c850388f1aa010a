pub mod event_buffer;

pub use event_buffer::{EventBuffer, DEFAULT_EVENT_CAPACITY};
