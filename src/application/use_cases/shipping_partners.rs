use crate::freshness::domain::{Serviceability, ServiceabilityQuery, ShippingPartner};
use crate::ports::outbound::AdminApi;
use crate::shared::Result;
use std::sync::Arc;

/// ShippingPartnersUseCase - partner listing and serviceability checks
pub struct ShippingPartnersUseCase<A: AdminApi + ?Sized> {
    api: Arc<A>,
}

impl<A: AdminApi + ?Sized> ShippingPartnersUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Lists partners; `active_only` drops deactivated ones
    pub async fn list(&self, active_only: bool) -> Result<Vec<ShippingPartner>> {
        let mut partners = self.api.list_shipping_partners().await?;
        if active_only {
            partners.retain(|partner| partner.active);
        }
        Ok(partners)
    }

    pub async fn check(&self, query: &ServiceabilityQuery) -> Result<Serviceability> {
        let result = self.api.check_serviceability(query).await?;
        tracing::info!(
            pickup = %query.pickup_pincode,
            delivery = %query.delivery_pincode,
            serviceable = result.serviceable,
            partners = result.partners.len(),
            "serviceability checked"
        );
        Ok(result)
    }
}
