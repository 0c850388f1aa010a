use crate::freshness::domain::{Endpoint, FetchRequest, MetricGroup, TimeRange};
use std::time::Duration;

/// Refresh interval for the analytics and shipping views
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Dashboard views whose data is kept fresh
///
/// Each view statically enumerates the requests that make up one fetch
/// cycle. The time range is a parameter of the range-aware descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Analytics,
    Shipping,
    Overview,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Analytics => "analytics",
            View::Shipping => "shipping",
            View::Overview => "overview",
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        DEFAULT_REFRESH_INTERVAL
    }

    /// FetchRequest descriptors for one cycle of this view
    pub fn requests(&self, range: TimeRange) -> Vec<FetchRequest> {
        let dashboard = || FetchRequest::new(MetricGroup::dashboard(), Endpoint::DashboardTotals);
        let sales =
            || FetchRequest::new(MetricGroup::sales(), Endpoint::SalesSeries).with_range(range);
        let shipping = || FetchRequest::new(MetricGroup::shipping(), Endpoint::ShippingPartners);
        let payments = || FetchRequest::new(MetricGroup::payments(), Endpoint::PaymentGateways);

        match self {
            View::Analytics => vec![dashboard(), sales()],
            View::Shipping => vec![shipping()],
            View::Overview => vec![dashboard(), sales(), shipping(), payments()],
        }
    }

    /// Groups whose payload depends on the selected time range
    pub fn range_scoped_groups(&self) -> Vec<MetricGroup> {
        self.requests(TimeRange::default())
            .into_iter()
            .filter(|request| request.range().is_some())
            .map(|request| request.name)
            .collect()
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "analytics" => Ok(View::Analytics),
            "shipping" => Ok(View::Shipping),
            "overview" | "dashboard" => Ok(View::Overview),
            _ => Err(format!(
                "Invalid view: {}. Please specify 'analytics', 'shipping' or 'overview'",
                s
            )),
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
