use crate::{route::waypoint::Waypoint, units::kilometers::Kilometers};

/// Great-circle distance between two waypoints on a sphere of the given radius.
pub fn haversine_distance(from: &Waypoint, to: &Waypoint, earth_radius: Kilometers) -> Kilometers {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let dlat = lat2 - lat1;
    let dlng = to.lng.to_radians() - from.lng.to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Kilometers::new(earth_radius.value() * c)
}

/// Length of the path visiting the waypoints in the given order.
pub fn path_distance(waypoints: &[Waypoint], earth_radius: Kilometers) -> Kilometers {
    waypoints
        .windows(2)
        .map(|pair| haversine_distance(&pair[0], &pair[1], earth_radius))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH_RADIUS: Kilometers = Kilometers::new(6371.0);

    #[test]
    fn test_one_degree_at_equator() {
        let distance = haversine_distance(
            &Waypoint::new(0.0, 0.0),
            &Waypoint::new(0.0, 1.0),
            EARTH_RADIUS,
        );

        assert!((distance.value() - 111.194_926).abs() < 1e-5);
    }

    #[test]
    fn test_same_point() {
        let point = Waypoint::new(21.0285, 105.8542);
        assert!(haversine_distance(&point, &point, EARTH_RADIUS).is_zero());
    }

    #[test]
    fn test_symmetric() {
        let hanoi = Waypoint::new(21.0285, 105.8542);
        let saigon = Waypoint::new(10.8231, 106.6297);

        let there = haversine_distance(&hanoi, &saigon, EARTH_RADIUS);
        let back = haversine_distance(&saigon, &hanoi, EARTH_RADIUS);

        assert!((there.value() - back.value()).abs() < 1e-9);
        assert!(there.value() > 1_100.0 && there.value() < 1_200.0);
    }

    #[test]
    fn test_path_distance() {
        let points = [
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 1.0),
            Waypoint::new(0.0, 2.0),
        ];

        let total = path_distance(&points, EARTH_RADIUS);
        assert!((total.value() - 2.0 * 111.194_926).abs() < 1e-4);
        assert!(path_distance(&points[..1], EARTH_RADIUS).is_zero());
    }
}
