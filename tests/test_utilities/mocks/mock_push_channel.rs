use anyhow::anyhow;
use async_trait::async_trait;
use dashboard_sync::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Mock PushChannel fed from a test-side sender
///
/// The first `connect` takes the receiving end; later connects fail.
/// Dropping the sender ends the connection.
pub struct MockPushChannel {
    receiver: Mutex<Option<mpsc::UnboundedReceiver<String>>>,
    connects: AtomicUsize,
    closes: Arc<AtomicUsize>,
}

impl MockPushChannel {
    pub fn new() -> (Self, mpsc::UnboundedSender<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let channel = Self {
            receiver: Mutex::new(Some(rx)),
            connects: AtomicUsize::new(0),
            closes: Arc::new(AtomicUsize::new(0)),
        };
        (channel, tx)
    }

    /// A channel whose connect always fails
    pub fn unreachable() -> Self {
        Self {
            receiver: Mutex::new(None),
            connects: AtomicUsize::new(0),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PushChannel for MockPushChannel {
    fn endpoint(&self) -> String {
        "mock://push".to_string()
    }

    async fn connect(&self) -> Result<Box<dyn PushConnection>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let receiver = self
            .receiver
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| anyhow!("connection refused"))?;
        Ok(Box::new(MockConnection {
            receiver,
            closes: Arc::clone(&self.closes),
        }))
    }
}

struct MockConnection {
    receiver: mpsc::UnboundedReceiver<String>,
    closes: Arc<AtomicUsize>,
}

#[async_trait]
impl PushConnection for MockConnection {
    async fn next_message(&mut self) -> Option<Result<String>> {
        self.receiver.recv().await.map(Ok)
    }

    async fn close(&mut self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
