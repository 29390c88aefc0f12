use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use comfy_table::Table;
use courier_estimator::{
    LogisticsEstimator,
    config::EstimatorConfig,
    delivery_time::{DeliveryTimeQuery, TrafficCondition, VehicleType, Weather},
    demand::DemandQuery,
    shipping_cost::{CarrierType, CostQuery},
};
use serde::Serialize;
use tracing::info;

use crate::{file_utils::read_waypoints, render};

#[derive(Args)]
pub struct EstimatorArgs {
    /// JSON file overriding the default rate tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl EstimatorArgs {
    fn estimator(&self) -> Result<LogisticsEstimator, anyhow::Error> {
        let config = match &self.config {
            Some(path) => {
                info!("Loading estimator config from {}", path.display());
                EstimatorConfig::from_json_file(path)
                    .with_context(|| format!("Could not load {}", path.display()))?
            }
            None => EstimatorConfig::default(),
        };

        Ok(LogisticsEstimator::new(config))
    }

    fn print<T, F>(&self, value: &T, to_table: F) -> Result<(), anyhow::Error>
    where
        T: Serialize,
        F: FnOnce(&T) -> Table,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", to_table(value));
        }

        Ok(())
    }
}

#[derive(Args)]
pub struct DeliveryTimeArgs {
    #[arg(short = 'k', long)]
    distance_km: f64,

    /// truck, van or motorcycle
    #[arg(short, long, default_value = "truck")]
    vehicle_type: VehicleType,

    /// low, normal or high
    #[arg(short, long, default_value = "normal")]
    traffic: TrafficCondition,

    /// clear, rain or fog
    #[arg(short, long, default_value = "clear")]
    weather: Weather,

    #[command(flatten)]
    common: EstimatorArgs,
}

pub fn delivery_time(args: DeliveryTimeArgs) -> Result<(), anyhow::Error> {
    let estimator = args.common.estimator()?;
    let result = estimator.predict_delivery_time(&DeliveryTimeQuery {
        distance_km: args.distance_km,
        vehicle_type: args.vehicle_type,
        traffic_condition: args.traffic,
        weather: args.weather,
    })?;

    args.common.print(&result, render::delivery_time_table)
}

#[derive(Args)]
pub struct CostArgs {
    #[arg(short = 'k', long)]
    distance_km: f64,

    #[arg(long, default_value_t = 0.0)]
    volume_m3: f64,

    #[arg(long, default_value_t = 0.0)]
    weight_kg: f64,

    /// standard, express or premium
    #[arg(short, long, default_value = "standard")]
    carrier_type: CarrierType,

    /// Apply the remote area surcharge
    #[arg(short, long)]
    remote: bool,

    #[command(flatten)]
    common: EstimatorArgs,
}

pub fn cost(args: CostArgs) -> Result<(), anyhow::Error> {
    let estimator = args.common.estimator()?;
    let result = estimator.estimate_shipping_cost(&CostQuery {
        distance_km: args.distance_km,
        volume_m3: args.volume_m3,
        weight_kg: args.weight_kg,
        carrier_type: args.carrier_type,
        remote_area: args.remote,
    })?;

    args.common.print(&result, render::cost_table)
}

#[derive(Args)]
pub struct DemandArgs {
    #[arg(short, long)]
    location: String,

    /// Day to forecast, as YYYY-MM-DD
    #[arg(long)]
    date: String,

    #[command(flatten)]
    common: EstimatorArgs,
}

pub fn demand(args: DemandArgs) -> Result<(), anyhow::Error> {
    let estimator = args.common.estimator()?;
    let result = estimator.forecast_demand(&DemandQuery {
        location: args.location,
        date: args.date,
        historical_data: None,
    })?;

    args.common.print(&result, render::demand_table)
}

#[derive(Args)]
pub struct RouteArgs {
    /// JSON array of {lat, lng, name} waypoints
    #[arg(short, long)]
    input: PathBuf,

    #[command(flatten)]
    common: EstimatorArgs,
}

pub fn route(args: RouteArgs) -> Result<(), anyhow::Error> {
    let estimator = args.common.estimator()?;
    let waypoints = read_waypoints(&args.input)?;
    info!("Optimizing {} waypoints", waypoints.len());

    let result = estimator.optimize_route(&waypoints)?;

    args.common.print(&result, render::route_table)
}
