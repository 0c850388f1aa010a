use anyhow::anyhow;
use async_trait::async_trait;
use dashboard_sync::prelude::*;
use serde_json::{json, Map};
use std::sync::Mutex;

/// Mock AdminApi backed by in-memory gateways and partners
#[derive(Default)]
pub struct MockAdminApi {
    gateways: Mutex<Vec<PaymentGateway>>,
    partners: Vec<ShippingPartner>,
    serviceable_pincodes: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl MockAdminApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partner(mut self, id: &str, name: &str, active: bool) -> Self {
        self.partners.push(ShippingPartner {
            id: id.to_string(),
            name: name.to_string(),
            active,
            code: None,
            extra: Map::new(),
        });
        self
    }

    pub fn with_serviceable(mut self, pincode: &str) -> Self {
        self.serviceable_pincodes.push(pincode.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl AdminApi for MockAdminApi {
    async fn list_payment_gateways(&self) -> Result<Vec<PaymentGateway>> {
        self.record("list_payment_gateways");
        Ok(self.gateways.lock().unwrap().clone())
    }

    async fn create_payment_gateway(&self, gateway: &NewPaymentGateway) -> Result<PaymentGateway> {
        self.record("create_payment_gateway");
        let mut gateways = self.gateways.lock().unwrap();
        let created = PaymentGateway {
            id: format!("gw_{}", gateways.len() + 1),
            name: gateway.name.clone(),
            provider: gateway.provider.clone(),
            enabled: gateway.enabled,
            mode: gateway.mode.clone(),
            extra: Map::new(),
        };
        gateways.push(created.clone());
        Ok(created)
    }

    async fn update_payment_gateway(
        &self,
        id: &GatewayId,
        update: &PaymentGatewayUpdate,
    ) -> Result<PaymentGateway> {
        self.record("update_payment_gateway");
        let mut gateways = self.gateways.lock().unwrap();
        let gateway = gateways
            .iter_mut()
            .find(|gateway| gateway.id == id.as_str())
            .ok_or_else(|| anyhow!("API rejected request: gateway {} not found", id.as_str()))?;
        if let Some(name) = &update.name {
            gateway.name = name.clone();
        }
        if let Some(enabled) = update.enabled {
            gateway.enabled = enabled;
        }
        if let Some(mode) = &update.mode {
            gateway.mode = Some(mode.clone());
        }
        Ok(gateway.clone())
    }

    async fn list_shipping_partners(&self) -> Result<Vec<ShippingPartner>> {
        self.record("list_shipping_partners");
        Ok(self.partners.clone())
    }

    async fn check_serviceability(&self, query: &ServiceabilityQuery) -> Result<Serviceability> {
        self.record("check_serviceability");
        let serviceable = self
            .serviceable_pincodes
            .iter()
            .any(|pincode| *pincode == query.delivery_pincode);
        let partners = if serviceable {
            self.partners
                .iter()
                .filter(|partner| partner.active)
                .map(|partner| json!({ "id": partner.id, "name": partner.name }))
                .collect()
        } else {
            Vec::new()
        };
        Ok(Serviceability {
            serviceable,
            partners,
            extra: Map::new(),
        })
    }
}
