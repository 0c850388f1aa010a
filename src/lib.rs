//! dashboard-sync - data freshness layer for an e-commerce admin dashboard
//!
//! This library keeps dashboard metric groups fresh through a recurring
//! refresh timer, server push notifications and time-range changes, and
//! exposes consistent snapshots to a rendering layer. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`freshness`): Snapshots, triggers, views and the live-event feed rules
//! - **Application Layer** (`application`): Coordinator, orchestrator, store and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): REST, WebSocket, console and file implementations of ports
//! - **Shared** (`shared`): Errors, logging, security checks and task handles
//!
//! # Example
//!
//! ```no_run
//! use dashboard_sync::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let api = Arc::new(HttpDashboardApi::new(
//!     "http://localhost:5000/api",
//!     Duration::from_secs(10),
//! )?);
//! let store = Arc::new(SnapshotStore::new(TimeRange::Month));
//!
//! let handle = DataFreshnessCoordinator::start(
//!     api,
//!     None,
//!     store,
//!     CoordinatorSettings::new(View::Analytics),
//! )?;
//!
//! let mut revisions = handle.subscribe();
//! revisions.changed().await?;
//! let output = TextFormatter::new().format(&handle.snapshot())?;
//! println!("{}", output);
//!
//! handle.set_time_range(TimeRange::Week)?;
//! handle.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod freshness;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{HttpDashboardApi, WebSocketPushChannel};
    pub use crate::adapters::outbound::random::RandomEventGenerator;
    pub use crate::application::dto::{
        CycleReport, FetchOutcome, FetchSnapshotRequest, FetchSnapshotResponse, OutputFormat,
    };
    pub use crate::application::store::{SnapshotStore, WriteOutcome};
    pub use crate::application::use_cases::{
        CoordinatorHandle, CoordinatorSettings, DataFreshnessCoordinator, EventFeedReader,
        FetchOrchestrator, FetchSnapshotUseCase, ManagePaymentGatewaysUseCase, PushListener,
        RefreshScheduler, SchedulerState, ShippingPartnersUseCase, SimulatedEventFeed,
    };
    pub use crate::freshness::domain::{
        ApiEnvelope, Endpoint, EventCategory, EventDraft, FetchRequest, FetchScope, Freshness,
        GatewayId, GroupEntry, LiveEvent, MetricGroup, NewPaymentGateway, PaymentGateway,
        PaymentGatewayUpdate, Priority, RefreshTrigger, Serviceability, ServiceabilityQuery,
        ShippingPartner, Snapshot, TimeRange,
    };
    pub use crate::freshness::policies::{EventPriorityPolicy, View};
    pub use crate::freshness::services::EventBuffer;
    pub use crate::ports::inbound::RefreshPort;
    pub use crate::ports::outbound::{
        AdminApi, DashboardDataSource, EventGenerator, OutputPresenter, ProgressReporter,
        PushChannel, PushConnection, SnapshotFormatter,
    };
    pub use crate::shared::Result;
}
