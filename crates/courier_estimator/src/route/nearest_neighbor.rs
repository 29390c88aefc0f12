use crate::{
    route::{haversine::haversine_distance, waypoint::Waypoint},
    units::kilometers::Kilometers,
};

/// Visiting order of a greedy nearest neighbor tour, as indices into the input.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNeighborTour {
    pub order: Vec<usize>,
    pub distance: Kilometers,
}

/// Starts at the first waypoint and repeatedly moves to the closest unvisited
/// one. Ties go to the waypoint that comes first in input order.
///
/// The pool of unvisited waypoints is tracked by index, so waypoints sharing
/// the same coordinates are each visited exactly once.
pub fn nearest_neighbor_tour(waypoints: &[Waypoint], earth_radius: Kilometers) -> NearestNeighborTour {
    if waypoints.is_empty() {
        return NearestNeighborTour {
            order: vec![],
            distance: Kilometers::ZERO,
        };
    }

    let mut order = Vec::with_capacity(waypoints.len());
    let mut remaining: Vec<usize> = (1..waypoints.len()).collect();
    let mut current = 0;
    let mut distance = Kilometers::ZERO;

    order.push(current);

    while !remaining.is_empty() {
        let mut nearest_position = 0;
        let mut nearest_distance =
            haversine_distance(&waypoints[current], &waypoints[remaining[0]], earth_radius);

        for (position, &candidate) in remaining.iter().enumerate().skip(1) {
            let candidate_distance =
                haversine_distance(&waypoints[current], &waypoints[candidate], earth_radius);

            if candidate_distance < nearest_distance {
                nearest_position = position;
                nearest_distance = candidate_distance;
            }
        }

        // Vec::remove keeps the remaining order stable for tie-breaking.
        current = remaining.remove(nearest_position);
        distance += nearest_distance;
        order.push(current);
    }

    NearestNeighborTour { order, distance }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH_RADIUS: Kilometers = Kilometers::new(6371.0);

    #[test]
    fn test_visits_closest_first() {
        let waypoints = [
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 3.0),
            Waypoint::new(0.0, 1.0),
            Waypoint::new(0.0, 2.0),
        ];

        let tour = nearest_neighbor_tour(&waypoints, EARTH_RADIUS);

        assert_eq!(tour.order, vec![0, 2, 3, 1]);
        assert!((tour.distance.value() - 3.0 * 111.194_926).abs() < 1e-4);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let waypoints = [
            Waypoint::new(0.0, 0.0),
            Waypoint::named(0.0, -1.0, "west"),
            Waypoint::named(0.0, 1.0, "east"),
        ];

        let tour = nearest_neighbor_tour(&waypoints, EARTH_RADIUS);

        assert_eq!(tour.order, vec![0, 1, 2]);
    }

    #[test]
    fn test_duplicate_coordinates_are_all_visited() {
        let waypoints = [
            Waypoint::named(0.0, 0.0, "depot"),
            Waypoint::named(0.0, 1.0, "first"),
            Waypoint::named(0.0, 1.0, "second"),
            Waypoint::named(0.0, 0.0, "depot-again"),
        ];

        let tour = nearest_neighbor_tour(&waypoints, EARTH_RADIUS);

        assert_eq!(tour.order, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_single_waypoint() {
        let tour = nearest_neighbor_tour(&[Waypoint::new(10.0, 10.0)], EARTH_RADIUS);

        assert_eq!(tour.order, vec![0]);
        assert!(tour.distance.is_zero());
    }
}
