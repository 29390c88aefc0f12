use std::sync::Arc;

use axum::{Json, extract::State};
use courier_estimator::{
    confidence::Confidence,
    delivery_time::{DeliveryTimeFactors, DeliveryTimeQuery},
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize, JsonSchema)]
pub struct PredictDeliveryTimeResponse {
    pub predicted_hours: u64,
    pub predicted_minutes: u32,
    pub confidence: Confidence,
    pub factors: DeliveryTimeFactors,
}

pub async fn predict_delivery_time_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DeliveryTimeQuery>,
) -> Result<Json<PredictDeliveryTimeResponse>, ApiError> {
    let prediction = state.estimator.predict_delivery_time(&body)?;

    Ok(Json(PredictDeliveryTimeResponse {
        predicted_hours: prediction.hours,
        predicted_minutes: prediction.minutes,
        confidence: prediction.confidence,
        factors: prediction.factors,
    }))
}
