/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (REST API, push channel, console, etc.).
pub mod admin_api;
pub mod data_source;
pub mod event_generator;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod push_channel;

pub use admin_api::AdminApi;
pub use data_source::DashboardDataSource;
pub use event_generator::EventGenerator;
pub use formatter::SnapshotFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use push_channel::{PushChannel, PushConnection};
