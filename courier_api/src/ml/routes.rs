use std::sync::Arc;

use aide::axum::{ApiRouter, routing::post};

use crate::{
    ml::{
        estimate_cost::estimate_cost_handler, forecast_demand::forecast_demand_handler,
        optimize_route::optimize_route_handler,
        predict_delivery_time::predict_delivery_time_handler,
    },
    state::AppState,
};

pub fn ml_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route(
            "/predict-delivery-time",
            post(predict_delivery_time_handler),
        )
        .api_route("/estimate-cost", post(estimate_cost_handler))
        .api_route("/forecast-demand", post(forecast_demand_handler))
        .api_route("/optimize-route", post(optimize_route_handler))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}
