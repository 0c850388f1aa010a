use crate::shared::Result;
use async_trait::async_trait;

/// PushChannel port for the optional low-latency notification path
///
/// The listener connects exactly once; reconnecting is deliberately not part
/// of this contract.
#[async_trait]
pub trait PushChannel: Send + Sync {
    /// Human-readable endpoint, used in log messages
    fn endpoint(&self) -> String;

    /// Opens the persistent connection
    async fn connect(&self) -> Result<Box<dyn PushConnection>>;
}

/// An open push connection
#[async_trait]
pub trait PushConnection: Send {
    /// Next inbound text message
    ///
    /// Returns `None` once the server closed the connection, `Some(Err(_))`
    /// on a transport error.
    async fn next_message(&mut self) -> Option<Result<String>>;

    /// Closes the connection. Must be safe to call on an already closed one.
    async fn close(&mut self) -> Result<()>;
}
