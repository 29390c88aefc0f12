use std::sync::Arc;

use axum::{Json, extract::State};
use courier_estimator::{
    confidence::Confidence,
    shipping_cost::{CostBreakdown, CostQuery},
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize, JsonSchema)]
pub struct EstimateCostResponse {
    pub estimated_cost_vnd: u64,
    pub breakdown: CostBreakdown,
    pub confidence: Confidence,
}

pub async fn estimate_cost_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CostQuery>,
) -> Result<Json<EstimateCostResponse>, ApiError> {
    let estimate = state.estimator.estimate_shipping_cost(&body)?;

    Ok(Json(EstimateCostResponse {
        estimated_cost_vnd: estimate.total_cost,
        breakdown: estimate.breakdown,
        confidence: estimate.confidence,
    }))
}
