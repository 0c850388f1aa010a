use crate::freshness::domain::{GatewayId, NewPaymentGateway, PaymentGateway, PaymentGatewayUpdate};
use crate::ports::outbound::AdminApi;
use crate::shared::Result;
use std::sync::Arc;

/// ManagePaymentGatewaysUseCase - list, create and update payment gateways
///
/// Input is validated locally before any request is sent; everything else
/// (uniqueness, provider support) is the server's call.
pub struct ManagePaymentGatewaysUseCase<A: AdminApi + ?Sized> {
    api: Arc<A>,
}

impl<A: AdminApi + ?Sized> ManagePaymentGatewaysUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<PaymentGateway>> {
        let gateways = self.api.list_payment_gateways().await?;
        tracing::debug!(count = gateways.len(), "payment gateways listed");
        Ok(gateways)
    }

    pub async fn create(&self, gateway: NewPaymentGateway) -> Result<PaymentGateway> {
        let created = self.api.create_payment_gateway(&gateway).await?;
        tracing::info!(id = %created.id, provider = %created.provider, "payment gateway created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, update: PaymentGatewayUpdate) -> Result<PaymentGateway> {
        let id = GatewayId::new(id)?;
        update.validate()?;

        let updated = self.api.update_payment_gateway(&id, &update).await?;
        tracing::info!(id = %id, "payment gateway updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freshness::domain::{Serviceability, ServiceabilityQuery, ShippingPartner};
    use async_trait::async_trait;
    use serde_json::Map;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingApi {
        calls: AtomicUsize,
    }

    fn gateway(id: &str) -> PaymentGateway {
        PaymentGateway {
            id: id.to_string(),
            name: "Razorpay".to_string(),
            provider: "razorpay".to_string(),
            enabled: true,
            mode: Some("test".to_string()),
            extra: Map::new(),
        }
    }

    #[async_trait]
    impl AdminApi for CountingApi {
        async fn list_payment_gateways(&self) -> Result<Vec<PaymentGateway>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![gateway("gw_1")])
        }

        async fn create_payment_gateway(&self, new: &NewPaymentGateway) -> Result<PaymentGateway> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut created = gateway("gw_new");
            created.name = new.name.clone();
            Ok(created)
        }

        async fn update_payment_gateway(
            &self,
            id: &GatewayId,
            update: &PaymentGatewayUpdate,
        ) -> Result<PaymentGateway> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut updated = gateway(id.as_str());
            if let Some(enabled) = update.enabled {
                updated.enabled = enabled;
            }
            Ok(updated)
        }

        async fn list_shipping_partners(&self) -> Result<Vec<ShippingPartner>> {
            unreachable!()
        }

        async fn check_serviceability(&self, _query: &ServiceabilityQuery) -> Result<Serviceability> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_list_and_create() {
        let use_case = ManagePaymentGatewaysUseCase::new(Arc::new(CountingApi::default()));
        assert_eq!(use_case.list().await.unwrap().len(), 1);

        let new = NewPaymentGateway::new("Stripe EU", "Stripe", true, None).unwrap();
        let created = use_case.create(new).await.unwrap();
        assert_eq!(created.name, "Stripe EU");
    }

    #[tokio::test]
    async fn test_update_applies_fields() {
        let use_case = ManagePaymentGatewaysUseCase::new(Arc::new(CountingApi::default()));
        let update = PaymentGatewayUpdate {
            enabled: Some(false),
            ..Default::default()
        };
        let updated = use_case.update("gw_1", update).await.unwrap();
        assert!(!updated.enabled);
        assert_eq!(updated.id, "gw_1");
    }

    #[tokio::test]
    async fn test_update_rejects_bad_input_without_calling_api() {
        let api = Arc::new(CountingApi::default());
        let use_case = ManagePaymentGatewaysUseCase::new(api.clone());

        let update = PaymentGatewayUpdate {
            enabled: Some(true),
            ..Default::default()
        };
        assert!(use_case.update("../secrets", update).await.is_err());
        assert!(use_case
            .update("gw_1", PaymentGatewayUpdate::default())
            .await
            .is_err());
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }
}
