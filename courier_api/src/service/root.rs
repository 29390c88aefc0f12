use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;

use crate::service::SERVICE_NAME;

#[derive(Serialize, JsonSchema)]
pub struct Endpoints {
    pub health: &'static str,
    pub predict_delivery_time: &'static str,
    pub estimate_cost: &'static str,
    pub forecast_demand: &'static str,
    pub optimize_route: &'static str,
}

#[derive(Serialize, JsonSchema)]
pub struct RootResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "/health",
            predict_delivery_time: "/api/ml/predict-delivery-time",
            estimate_cost: "/api/ml/estimate-cost",
            forecast_demand: "/api/ml/forecast-demand",
            optimize_route: "/api/ml/optimize-route",
        },
    })
}
