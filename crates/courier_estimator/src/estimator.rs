use tracing::{debug, instrument};

use crate::{
    config::EstimatorConfig,
    delivery_time::{self, DeliveryTimeQuery, DeliveryTimeResult},
    demand::{self, DemandQuery, DemandResult},
    error::EstimatorError,
    route::{self, RouteResult, waypoint::Waypoint},
    shipping_cost::{self, CostQuery, CostResult},
};

/// Stateless logistics calculator over a fixed [`EstimatorConfig`].
///
/// Every operation is a pure function of its input and the config, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct LogisticsEstimator {
    config: EstimatorConfig,
}

impl LogisticsEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Travel time for a distance under the given vehicle, traffic and
    /// weather, plus the handling buffer.
    #[instrument(skip(self))]
    pub fn predict_delivery_time(
        &self,
        query: &DeliveryTimeQuery,
    ) -> Result<DeliveryTimeResult, EstimatorError> {
        let result = delivery_time::predict_delivery_time(&self.config, query)?;
        debug!(
            hours = result.hours,
            minutes = result.minutes,
            confidence = result.confidence.value(),
            "predicted delivery time"
        );
        Ok(result)
    }

    #[instrument(skip(self))]
    pub fn estimate_shipping_cost(&self, query: &CostQuery) -> Result<CostResult, EstimatorError> {
        let result = shipping_cost::estimate_shipping_cost(&self.config, query)?;
        debug!(total_cost = result.total_cost, "estimated shipping cost");
        Ok(result)
    }

    /// Weekday based demand. `historical_data` has no effect on the result.
    #[instrument(skip(self, query), fields(location = %query.location, date = %query.date))]
    pub fn forecast_demand(&self, query: &DemandQuery) -> Result<DemandResult, EstimatorError> {
        let result = demand::forecast_demand(&self.config, query)?;
        debug!(demand = result.demand, trend = ?result.trend, "forecasted demand");
        Ok(result)
    }

    #[instrument(skip_all, fields(waypoints = waypoints.len()))]
    pub fn optimize_route(&self, waypoints: &[Waypoint]) -> Result<RouteResult, EstimatorError> {
        let result = route::optimize_route(&self.config, waypoints)?;
        debug!(
            total_distance_km = result.total_distance_km,
            savings_percentage = result.savings_percentage,
            "optimized route"
        );
        Ok(result)
    }
}
