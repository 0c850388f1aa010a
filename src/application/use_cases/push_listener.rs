use crate::freshness::domain::RefreshTrigger;
use crate::ports::outbound::PushChannel;
use crate::shared::task::TaskHandle;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Message type that asks for an analytics refresh
pub const ANALYTICS_UPDATE_SIGNAL: &str = "ANALYTICS_UPDATE";

#[derive(Debug, Deserialize)]
struct PushMessage {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// PushListener - turns server notifications into refresh triggers
///
/// Connects once. Only `ANALYTICS_UPDATE` messages produce a trigger; every
/// other message is logged and ignored. A failed or dropped connection is
/// logged and the listener simply ends: interval refresh keeps running and
/// there is no reconnect.
pub struct PushListener;

impl PushListener {
    pub fn start(
        channel: Arc<dyn PushChannel>,
        sink: mpsc::UnboundedSender<RefreshTrigger>,
    ) -> TaskHandle {
        TaskHandle::spawn("push-listener", move |mut stop| async move {
            let endpoint = channel.endpoint();

            let mut connection = tokio::select! {
                biased;
                _ = stop.stopped() => return,
                connected = channel.connect() => match connected {
                    Ok(connection) => connection,
                    Err(e) => {
                        tracing::warn!(
                            endpoint = %endpoint,
                            error = %format!("{:#}", e),
                            "push channel unavailable; relying on interval refresh"
                        );
                        return;
                    }
                },
            };
            tracing::info!(endpoint = %endpoint, "push channel connected");

            loop {
                tokio::select! {
                    biased;
                    _ = stop.stopped() => break,
                    message = connection.next_message() => match message {
                        Some(Ok(text)) => {
                            if let Some(trigger) = Self::interpret(&text) {
                                if sink.send(trigger).is_err() {
                                    break;
                                }
                            }
                        }
                        Some(Err(e)) => {
                            tracing::warn!(
                                endpoint = %endpoint,
                                error = %format!("{:#}", e),
                                "push channel failed; relying on interval refresh"
                            );
                            break;
                        }
                        None => {
                            tracing::info!(endpoint = %endpoint, "push channel closed by server");
                            break;
                        }
                    },
                }
            }

            if let Err(e) = connection.close().await {
                tracing::debug!(error = %e, "error while closing push channel");
            }
        })
    }

    /// Maps one raw push message to a trigger, if it asks for one
    pub fn interpret(text: &str) -> Option<RefreshTrigger> {
        let message: PushMessage = match serde_json::from_str(text) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed push message");
                return None;
            }
        };

        match message.kind.as_deref() {
            Some(ANALYTICS_UPDATE_SIGNAL) => Some(RefreshTrigger::push(ANALYTICS_UPDATE_SIGNAL)),
            Some(other) => {
                tracing::debug!(signal = other, "ignoring push message");
                None
            }
            None => {
                tracing::debug!("ignoring push message without a type");
                None
            }
        }
    }
}
