pub mod config;
pub mod confidence;
pub mod delivery_time;
pub mod demand;
pub mod error;
pub mod estimator;
pub mod route;
pub mod shipping_cost;
pub mod units;

mod category;
mod utils;

pub use estimator::LogisticsEstimator;
