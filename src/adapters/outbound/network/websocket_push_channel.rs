use crate::ports::outbound::{PushChannel, PushConnection};
use crate::shared::error::SyncError;
use crate::shared::Result;
use async_trait::async_trait;
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

/// WebSocketPushChannel adapter for server push notifications
///
/// Implements the PushChannel port over a plain WebSocket. Only text
/// frames (and binary frames holding UTF-8) are surfaced; control frames
/// are handled by the transport.
pub struct WebSocketPushChannel {
    url: String,
}

impl WebSocketPushChannel {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if !(url.starts_with("ws://") || url.starts_with("wss://")) {
            return Err(SyncError::validation(format!(
                "Push URL must start with ws:// or wss://, got '{}'",
                url
            ))
            .into());
        }
        Ok(Self { url })
    }
}

#[async_trait]
impl PushChannel for WebSocketPushChannel {
    fn endpoint(&self) -> String {
        self.url.clone()
    }

    async fn connect(&self) -> Result<Box<dyn PushConnection>> {
        let (stream, _response) = tokio_tungstenite::connect_async(self.url.as_str())
            .await
            .map_err(|e| SyncError::PushChannel {
                url: self.url.clone(),
                details: e.to_string(),
            })?;
        Ok(Box::new(WebSocketConnection {
            url: self.url.clone(),
            stream,
            closed: false,
        }))
    }
}

struct WebSocketConnection {
    url: String,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    closed: bool,
}

#[async_trait]
impl PushConnection for WebSocketConnection {
    async fn next_message(&mut self) -> Option<Result<String>> {
        if self.closed {
            return None;
        }

        while let Some(frame) = self.stream.next().await {
            match frame {
                Ok(Message::Text(text)) => return Some(Ok(text)),
                Ok(Message::Binary(bytes)) => match String::from_utf8(bytes) {
                    Ok(text) => return Some(Ok(text)),
                    Err(_) => tracing::debug!("ignoring non UTF-8 binary push frame"),
                },
                Ok(Message::Close(_)) => {
                    self.closed = true;
                    return None;
                }
                Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_)) => {}
                Err(e) => {
                    self.closed = true;
                    return Some(Err(SyncError::PushChannel {
                        url: self.url.clone(),
                        details: e.to_string(),
                    }
                    .into()));
                }
            }
        }

        self.closed = true;
        None
    }

    async fn close(&mut self) -> Result<()> {
        match self.stream.close(None).await {
            Ok(())
            | Err(tungstenite::Error::ConnectionClosed)
            | Err(tungstenite::Error::AlreadyClosed) => {
                self.closed = true;
                Ok(())
            }
            Err(e) => Err(SyncError::PushChannel {
                url: self.url.clone(),
                details: e.to_string(),
            }
            .into()),
        }
    }
}
