pub mod estimate_cost;
pub mod forecast_demand;
pub mod optimize_route;
pub mod predict_delivery_time;
pub mod routes;
