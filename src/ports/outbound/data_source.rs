use crate::freshness::domain::FetchRequest;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// DashboardDataSource port for reading view data
///
/// This port abstracts the REST API the coordinator polls. One call serves
/// one FetchRequest descriptor of a fetch cycle.
///
/// # Async Support
/// Implementations must be `Send + Sync`: all requests of a cycle are issued
/// concurrently against the same source.
#[async_trait]
pub trait DashboardDataSource: Send + Sync {
    /// Fetches the payload for a single descriptor
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The API returns a non-success status code
    /// - The envelope reports `success: false`
    async fn fetch(&self, request: &FetchRequest) -> Result<Value>;
}
