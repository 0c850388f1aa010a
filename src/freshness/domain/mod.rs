pub mod api_envelope;
pub mod fetch_request;
pub mod live_event;
pub mod metric_group;
pub mod payment_gateway;
pub mod refresh_trigger;
pub mod shipping;
pub mod snapshot;
pub mod time_range;

pub use api_envelope::ApiEnvelope;
pub use fetch_request::{Endpoint, FetchRequest};
pub use live_event::{EventCategory, EventDraft, LiveEvent, Priority};
pub use metric_group::MetricGroup;
pub use payment_gateway::{GatewayId, NewPaymentGateway, PaymentGateway, PaymentGatewayUpdate};
pub use refresh_trigger::RefreshTrigger;
pub use shipping::{Serviceability, ServiceabilityQuery, ShippingPartner};
pub use snapshot::{Freshness, GroupEntry, Snapshot};
pub use time_range::{FetchScope, TimeRange};
