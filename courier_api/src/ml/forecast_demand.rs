use std::sync::Arc;

use axum::{Json, extract::State};
use courier_estimator::{
    confidence::Confidence,
    demand::{DemandFactors, DemandQuery, Trend},
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize, JsonSchema)]
pub struct ForecastDemandResponse {
    pub forecasted_demand: u32,
    pub trend: Trend,
    pub confidence: Confidence,
    pub factors: DemandFactors,
}

pub async fn forecast_demand_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DemandQuery>,
) -> Result<Json<ForecastDemandResponse>, ApiError> {
    let forecast = state.estimator.forecast_demand(&body)?;

    Ok(Json(ForecastDemandResponse {
        forecasted_demand: forecast.demand,
        trend: forecast.trend,
        confidence: forecast.confidence,
        factors: forecast.factors,
    }))
}
