pub mod haversine;
pub mod nearest_neighbor;
pub mod waypoint;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::EstimatorConfig,
    error::EstimatorError,
    route::{haversine::path_distance, nearest_neighbor::nearest_neighbor_tour, waypoint::Waypoint},
    utils::round::round_to,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteResult {
    /// Permutation of the input waypoints, starting with the first one.
    pub route: Vec<Waypoint>,
    pub total_distance_km: f64,
    pub estimated_time_hours: f64,
    /// How much shorter the route is than the input order, never negative.
    pub savings_percentage: f64,
}

pub(crate) fn optimize_route(
    config: &EstimatorConfig,
    waypoints: &[Waypoint],
) -> Result<RouteResult, EstimatorError> {
    if let Some((index, waypoint)) = waypoints
        .iter()
        .enumerate()
        .find(|(_, waypoint)| !waypoint.has_valid_coordinates())
    {
        return Err(EstimatorError::InvalidCoordinate {
            index,
            lat: waypoint.lat,
            lng: waypoint.lng,
        });
    }

    if waypoints.len() < 2 {
        return Ok(RouteResult {
            route: waypoints.to_vec(),
            total_distance_km: 0.0,
            estimated_time_hours: 0.0,
            savings_percentage: 0.0,
        });
    }

    let tour = nearest_neighbor_tour(waypoints, config.earth_radius);
    let input_order_distance = path_distance(waypoints, config.earth_radius);

    let savings = if input_order_distance.value() > 0.0 {
        ((input_order_distance - tour.distance) / input_order_distance * 100.0).max(0.0)
    } else {
        0.0
    };

    Ok(RouteResult {
        route: tour
            .order
            .iter()
            .map(|&index| waypoints[index].clone())
            .collect(),
        total_distance_km: round_to(tour.distance.value(), 2),
        estimated_time_hours: round_to(tour.distance / config.route_average_speed, 2),
        savings_percentage: round_to(savings, 2),
    })
}
