use crate::freshness::domain::{
    GatewayId, NewPaymentGateway, PaymentGateway, PaymentGatewayUpdate, Serviceability,
    ServiceabilityQuery, ShippingPartner,
};
use crate::shared::Result;
use async_trait::async_trait;

/// AdminApi port for payment-gateway and shipping-partner management
///
/// Separate from [`DashboardDataSource`](super::DashboardDataSource) so the
/// freshness machinery never depends on write operations.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_payment_gateways(&self) -> Result<Vec<PaymentGateway>>;

    async fn create_payment_gateway(&self, gateway: &NewPaymentGateway) -> Result<PaymentGateway>;

    async fn update_payment_gateway(
        &self,
        id: &GatewayId,
        update: &PaymentGatewayUpdate,
    ) -> Result<PaymentGateway>;

    async fn list_shipping_partners(&self) -> Result<Vec<ShippingPartner>>;

    /// Asks the server whether any partner can ship between two pincodes
    async fn check_serviceability(&self, query: &ServiceabilityQuery) -> Result<Serviceability>;
}
