use std::sync::Arc;

use axum::{Json, extract::State};
use courier_estimator::route::waypoint::Waypoint;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize, JsonSchema)]
pub struct OptimizeRouteResponse {
    pub optimized_route: Vec<Waypoint>,
    pub total_distance_km: f64,
    pub estimated_time_hours: f64,
    pub savings_percentage: f64,
}

pub async fn optimize_route_handler(
    State(state): State<Arc<AppState>>,
    Json(waypoints): Json<Vec<Waypoint>>,
) -> Result<Json<OptimizeRouteResponse>, ApiError> {
    let optimized = state.estimator.optimize_route(&waypoints)?;

    Ok(Json(OptimizeRouteResponse {
        optimized_route: optimized.route,
        total_distance_km: optimized.total_distance_km,
        estimated_time_hours: optimized.estimated_time_hours,
        savings_percentage: optimized.savings_percentage,
    }))
}
