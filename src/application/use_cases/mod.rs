/// Use cases module containing application business logic orchestration
mod coordinator;
mod event_feed;
mod fetch_orchestrator;
mod fetch_snapshot;
mod manage_gateways;
mod push_listener;
mod refresh_scheduler;
mod shipping_partners;

pub use coordinator::{CoordinatorHandle, CoordinatorSettings, DataFreshnessCoordinator};
pub use event_feed::{EventFeedReader, SimulatedEventFeed, DEFAULT_FEED_INTERVAL};
pub use fetch_orchestrator::FetchOrchestrator;
pub use fetch_snapshot::FetchSnapshotUseCase;
pub use manage_gateways::ManagePaymentGatewaysUseCase;
pub use push_listener::{PushListener, ANALYTICS_UPDATE_SIGNAL};
pub use refresh_scheduler::{RefreshScheduler, SchedulerState};
pub use shipping_partners::ShippingPartnersUseCase;
