/// Network adapters for the admin REST API and the push channel
mod http_dashboard_api;
mod websocket_push_channel;

pub use http_dashboard_api::{HttpDashboardApi, DEFAULT_REQUEST_TIMEOUT};
pub use websocket_push_channel::WebSocketPushChannel;
