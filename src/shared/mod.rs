/// Shared kernel - cross-cutting utilities used by every layer
pub mod error;
pub mod logging;
pub mod result;
pub mod security;
pub mod task;

pub use result::Result;
