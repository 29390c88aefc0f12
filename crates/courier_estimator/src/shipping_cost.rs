use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    category::define_category, confidence::Confidence, config::EstimatorConfig,
    error::EstimatorError, utils::round::floor_to_u64,
};

define_category!(
    /// Service class that selects the per kilometer base rate.
    CarrierType {
        Standard => "standard",
        Express => "express",
        Premium => "premium",
    }
);

impl Default for CarrierType {
    fn default() -> Self {
        CarrierType::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CostQuery {
    pub distance_km: f64,
    pub volume_m3: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub carrier_type: CarrierType,
    #[serde(default)]
    pub remote_area: bool,
}

/// Each component is floored on its own, so the components may not add up to
/// `total_cost` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CostBreakdown {
    pub distance_cost: u64,
    pub volume_cost: u64,
    pub weight_cost: u64,
    pub remote_surcharge: u64,
    pub subtotal: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CostResult {
    pub total_cost: u64,
    pub breakdown: CostBreakdown,
    pub confidence: Confidence,
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, EstimatorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EstimatorError::NegativeQuantity { field, value })
    }
}

pub(crate) fn estimate_shipping_cost(
    config: &EstimatorConfig,
    query: &CostQuery,
) -> Result<CostResult, EstimatorError> {
    let distance_km = ensure_non_negative("distance_km", query.distance_km)?;
    let volume_m3 = ensure_non_negative("volume_m3", query.volume_m3)?;
    let weight_kg = ensure_non_negative("weight_kg", query.weight_kg)?;

    let distance_cost = distance_km * config.carrier_rates.resolve(&query.carrier_type);
    let volume_cost = volume_m3 * config.volume_rate;
    let weight_cost = weight_kg * config.weight_rate;
    let subtotal = distance_cost + volume_cost + weight_cost;

    let surcharge = if query.remote_area {
        subtotal * config.remote_surcharge
    } else {
        0.0
    };

    Ok(CostResult {
        total_cost: floor_to_u64("total_cost", subtotal + surcharge)?,
        breakdown: CostBreakdown {
            distance_cost: floor_to_u64("distance_cost", distance_cost)?,
            volume_cost: floor_to_u64("volume_cost", volume_cost)?,
            weight_cost: floor_to_u64("weight_cost", weight_cost)?,
            remote_surcharge: floor_to_u64("remote_surcharge", surcharge)?,
            subtotal: floor_to_u64("subtotal", subtotal)?,
        },
        confidence: config.cost_confidence.resolve(distance_km),
    })
}
