use axum::Json;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::Serialize;

use crate::service::SERVICE_NAME;

#[derive(Serialize, JsonSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: Timestamp,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Timestamp::now(),
    })
}
