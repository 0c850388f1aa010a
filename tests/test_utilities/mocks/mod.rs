/// Mock implementations for testing
mod mock_admin_api;
mod mock_data_source;
mod mock_event_generator;
mod mock_progress_reporter;
mod mock_push_channel;

pub use mock_admin_api::MockAdminApi;
pub use mock_data_source::MockDataSource;
pub use mock_event_generator::MockEventGenerator;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_push_channel::MockPushChannel;
