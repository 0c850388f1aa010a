use crate::shared::error::SyncError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shipping partner as listed by the admin API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingPartner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Serviceability check between two postal codes
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceabilityQuery {
    pub pickup_pincode: String,
    pub delivery_pincode: String,
    pub weight_kg: Option<f64>,
    pub cod: bool,
}

impl ServiceabilityQuery {
    pub fn new(
        pickup_pincode: impl Into<String>,
        delivery_pincode: impl Into<String>,
        weight_kg: Option<f64>,
        cod: bool,
    ) -> Result<Self> {
        let query = Self {
            pickup_pincode: pickup_pincode.into().trim().to_string(),
            delivery_pincode: delivery_pincode.into().trim().to_string(),
            weight_kg,
            cod,
        };
        validate_pincode(&query.pickup_pincode, "Pickup pincode")?;
        validate_pincode(&query.delivery_pincode, "Delivery pincode")?;
        if let Some(weight) = weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(SyncError::validation(format!(
                    "Parcel weight must be a positive number of kilograms, got {}",
                    weight
                ))
                .into());
            }
        }
        Ok(query)
    }

    /// Query parameters in a stable order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("pickup", self.pickup_pincode.clone()),
            ("delivery", self.delivery_pincode.clone()),
            ("cod", self.cod.to_string()),
        ];
        if let Some(weight) = self.weight_kg {
            params.push(("weight", weight.to_string()));
        }
        params
    }
}

fn validate_pincode(pincode: &str, label: &str) -> Result<()> {
    let valid_length = (4..=10).contains(&pincode.len());
    if !valid_length || !pincode.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(SyncError::validation(format!(
            "{} '{}' must be 4-10 letters or digits",
            label, pincode
        ))
        .into());
    }
    Ok(())
}

/// Result of a serviceability check, as computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Serviceability {
    pub serviceable: bool,
    #[serde(default)]
    pub partners: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
