use super::{MetricGroup, TimeRange};
use serde::Serialize;
use std::collections::BTreeMap;

/// REST endpoints the freshness layer reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    DashboardTotals,
    SalesSeries,
    PaymentGateways,
    ShippingPartners,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::DashboardTotals => "/analytics/dashboard",
            Endpoint::SalesSeries => "/analytics/sales",
            Endpoint::PaymentGateways => "/payment-gateways",
            Endpoint::ShippingPartners => "/shipping-partners",
        }
    }
}

/// Descriptor for one request of a fetch cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchRequest {
    pub name: MetricGroup,
    pub endpoint: Endpoint,
    pub params: BTreeMap<String, String>,
}

impl FetchRequest {
    pub fn new(name: MetricGroup, endpoint: Endpoint) -> Self {
        Self {
            name,
            endpoint,
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_range(self, range: TimeRange) -> Self {
        self.with_param("range", range.as_str())
    }

    /// The time range this request is scoped to, if any
    pub fn range(&self) -> Option<&str> {
        self.params.get("range").map(String::as_str)
    }
}
