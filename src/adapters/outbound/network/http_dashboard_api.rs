use crate::freshness::domain::{
    ApiEnvelope, Endpoint, FetchRequest, GatewayId, NewPaymentGateway, PaymentGateway,
    PaymentGatewayUpdate, Serviceability, ServiceabilityQuery, ShippingPartner,
};
use crate::ports::outbound::{AdminApi, DashboardDataSource};
use crate::shared::error::SyncError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Path of the serviceability check, relative to the base URL
const SERVICEABILITY_PATH: &str = "/shipping-partners/serviceability";

const NO_PARAMS: [(&str, &str); 0] = [];

/// HttpDashboardApi adapter for the admin REST API
///
/// Implements both the read-only [`DashboardDataSource`] used by the
/// freshness layer and the [`AdminApi`] used by the management commands.
/// Every response is expected in the `{success, data, error}` envelope.
///
/// No retries: a failed request becomes a failed group and the next
/// refresh tick is the retry.
pub struct HttpDashboardApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDashboardApi {
    /// Creates a client for `base_url` (e.g. `http://localhost:5000/api`)
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SyncError::validation(format!(
                "API base URL must start with http:// or https://, got '{}'",
                base_url
            ))
            .into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dashboard-sync/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds an absolute URL with url-encoded query parameters
    fn url<'a>(&self, path: &str, params: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
        let query: Vec<String> = params
            .into_iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();

        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query.join("&"))
        }
    }

    /// Sends a request and unwraps the response envelope
    async fn send(&self, request: reqwest::RequestBuilder, path: &str) -> Result<Value> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach {}{}", self.base_url, path))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", path))?;

        if !status.is_success() {
            // Error responses usually still carry the envelope with a message.
            if let Ok(envelope) = serde_json::from_str::<ApiEnvelope>(&body) {
                if let Some(message) = envelope.error {
                    return Err(SyncError::ApiRejected {
                        endpoint: path.to_string(),
                        message,
                    }
                    .into());
                }
            }
            return Err(SyncError::HttpStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let envelope: ApiEnvelope = serde_json::from_str(&body)
            .with_context(|| format!("Response from {} is not a valid API envelope", path))?;
        envelope.into_payload(path)
    }

    async fn get<'a>(
        &self,
        path: &str,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Value> {
        let url = self.url(path, params);
        tracing::debug!(url = %url, "GET");
        self.send(self.client.get(&url), path).await
    }

    fn decode<T: DeserializeOwned>(data: Value, path: &str) -> Result<T> {
        serde_json::from_value(data)
            .with_context(|| format!("Unexpected payload shape from {}", path))
    }
}

#[async_trait]
impl DashboardDataSource for HttpDashboardApi {
    async fn fetch(&self, request: &FetchRequest) -> Result<Value> {
        let params = request
            .params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()));
        self.get(request.endpoint.path(), params).await
    }
}

#[async_trait]
impl AdminApi for HttpDashboardApi {
    async fn list_payment_gateways(&self) -> Result<Vec<PaymentGateway>> {
        let path = Endpoint::PaymentGateways.path();
        let data = self.get(path, NO_PARAMS).await?;
        Self::decode(data, path)
    }

    async fn create_payment_gateway(&self, gateway: &NewPaymentGateway) -> Result<PaymentGateway> {
        let path = Endpoint::PaymentGateways.path();
        let url = self.url(path, NO_PARAMS);
        tracing::debug!(url = %url, "POST");
        let data = self.send(self.client.post(&url).json(gateway), path).await?;
        Self::decode(data, path)
    }

    async fn update_payment_gateway(
        &self,
        id: &GatewayId,
        update: &PaymentGatewayUpdate,
    ) -> Result<PaymentGateway> {
        let path = format!(
            "{}/{}",
            Endpoint::PaymentGateways.path(),
            urlencoding::encode(id.as_str())
        );
        let url = self.url(&path, NO_PARAMS);
        tracing::debug!(url = %url, "PUT");
        let data = self.send(self.client.put(&url).json(update), &path).await?;
        Self::decode(data, &path)
    }

    async fn list_shipping_partners(&self) -> Result<Vec<ShippingPartner>> {
        let path = Endpoint::ShippingPartners.path();
        let data = self.get(path, NO_PARAMS).await?;
        Self::decode(data, path)
    }

    async fn check_serviceability(&self, query: &ServiceabilityQuery) -> Result<Serviceability> {
        let params = query.params();
        let data = self
            .get(
                SERVICEABILITY_PATH,
                params.iter().map(|(key, value)| (*key, value.as_str())),
            )
            .await?;
        Self::decode(data, SERVICEABILITY_PATH)
    }
}
