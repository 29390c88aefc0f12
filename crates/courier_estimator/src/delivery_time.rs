use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    category::define_category, confidence::Confidence, config::EstimatorConfig,
    error::EstimatorError,
    units::kilometers::Kilometers,
    utils::round::{floor_to_u64, round_to},
};

define_category!(
    VehicleType {
        Truck => "truck",
        Van => "van",
        Motorcycle => "motorcycle",
    }
);

define_category!(
    TrafficCondition {
        Low => "low",
        Normal => "normal",
        High => "high",
    }
);

define_category!(
    Weather {
        Clear => "clear",
        Rain => "rain",
        Fog => "fog",
    }
);

impl Default for TrafficCondition {
    fn default() -> Self {
        TrafficCondition::Normal
    }
}

impl Default for Weather {
    fn default() -> Self {
        Weather::Clear
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeliveryTimeQuery {
    pub distance_km: f64,
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub traffic_condition: TrafficCondition,
    #[serde(default)]
    pub weather: Weather,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeliveryTimeResult {
    pub hours: u64,
    /// Always below 60, overflow is carried into `hours`.
    pub minutes: u32,
    pub confidence: Confidence,
    pub factors: DeliveryTimeFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeliveryTimeFactors {
    pub distance_km: f64,
    pub vehicle_type: VehicleType,
    pub base_speed_kmh: f64,
    pub adjusted_speed_kmh: f64,
    pub traffic_condition: TrafficCondition,
    pub traffic_multiplier: f64,
    pub weather: Weather,
    pub weather_multiplier: f64,
}

pub(crate) fn predict_delivery_time(
    config: &EstimatorConfig,
    query: &DeliveryTimeQuery,
) -> Result<DeliveryTimeResult, EstimatorError> {
    if !query.distance_km.is_finite() || query.distance_km <= 0.0 {
        return Err(EstimatorError::InvalidDistance(query.distance_km));
    }

    let base_speed = config.vehicle_speeds.resolve(&query.vehicle_type);
    let traffic_multiplier = config.traffic_multipliers.resolve(&query.traffic_condition);
    let weather_multiplier = config.weather_multipliers.resolve(&query.weather);

    let adjusted_speed = base_speed / (traffic_multiplier * weather_multiplier);
    let raw_hours = Kilometers::new(query.distance_km) / adjusted_speed;

    let whole_hours = raw_hours.trunc();
    let travel_minutes = ((raw_hours - whole_hours) * 60.0) as u32;
    let minutes = travel_minutes + config.handling_buffer_minutes;

    let whole_hours = floor_to_u64("hours", whole_hours)?;

    Ok(DeliveryTimeResult {
        hours: whole_hours + u64::from(minutes / 60),
        minutes: minutes % 60,
        confidence: config.delivery_confidence.resolve(query.distance_km),
        factors: DeliveryTimeFactors {
            distance_km: query.distance_km,
            vehicle_type: query.vehicle_type.clone(),
            base_speed_kmh: base_speed.value(),
            adjusted_speed_kmh: round_to(adjusted_speed.value(), 2),
            traffic_condition: query.traffic_condition.clone(),
            traffic_multiplier,
            weather: query.weather.clone(),
            weather_multiplier,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(distance_km: f64, vehicle_type: &str, traffic: &str, weather: &str) -> DeliveryTimeQuery {
        DeliveryTimeQuery {
            distance_km,
            vehicle_type: VehicleType::from(vehicle_type),
            traffic_condition: TrafficCondition::from(traffic),
            weather: Weather::from(weather),
        }
    }

    #[test]
    fn test_truck_normal_clear() {
        let config = EstimatorConfig::default();
        let result = predict_delivery_time(&config, &query(100.0, "truck", "normal", "clear")).unwrap();

        assert_eq!(result.hours, 3);
        assert_eq!(result.minutes, 6);
        assert_eq!(result.confidence.value(), 0.75);
        assert_eq!(result.factors.base_speed_kmh, 50.0);
        assert_eq!(result.factors.adjusted_speed_kmh, 38.46);
        assert_eq!(result.factors.traffic_multiplier, 1.3);
        assert_eq!(result.factors.weather_multiplier, 1.0);
    }

    #[test]
    fn test_buffer_without_carry() {
        // 60 km at 60 km/h with no slowdown is exactly one hour.
        let config = EstimatorConfig::default();
        let result = predict_delivery_time(&config, &query(60.0, "van", "low", "clear")).unwrap();

        assert_eq!(result.hours, 1);
        assert_eq!(result.minutes, 30);
        assert_eq!(result.confidence.value(), 0.75);
    }

    #[test]
    fn test_buffer_carries_into_hours() {
        // 30 km at 40 km/h is 45 minutes, plus the buffer is 1h15m.
        let config = EstimatorConfig::default();
        let result =
            predict_delivery_time(&config, &query(30.0, "motorcycle", "low", "clear")).unwrap();

        assert_eq!(result.hours, 1);
        assert_eq!(result.minutes, 15);
        assert_eq!(result.confidence.value(), 0.85);
    }

    #[test]
    fn test_long_distance_confidence() {
        let config = EstimatorConfig::default();
        let result = predict_delivery_time(&config, &query(500.0, "truck", "high", "fog")).unwrap();

        assert_eq!(result.confidence.value(), 0.65);
        assert!(result.minutes < 60);
    }

    #[test]
    fn test_unknown_vehicle_uses_fallback_speed() {
        let config = EstimatorConfig::default();
        let drone = predict_delivery_time(&config, &query(100.0, "drone", "normal", "clear")).unwrap();
        let truck = predict_delivery_time(&config, &query(100.0, "truck", "normal", "clear")).unwrap();

        assert_eq!(drone.factors.base_speed_kmh, 50.0);
        assert_eq!(drone.factors.vehicle_type.as_str(), "drone");
        assert_eq!((drone.hours, drone.minutes), (truck.hours, truck.minutes));
    }

    #[test]
    fn test_unknown_conditions_use_fallback_multipliers() {
        let config = EstimatorConfig::default();
        let result = predict_delivery_time(&config, &query(10.0, "van", "jammed", "hail")).unwrap();

        assert_eq!(result.factors.traffic_multiplier, 1.3);
        assert_eq!(result.factors.weather_multiplier, 1.0);
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let config = EstimatorConfig::default();

        assert!(matches!(
            predict_delivery_time(&config, &query(0.0, "truck", "normal", "clear")),
            Err(EstimatorError::InvalidDistance(_))
        ));
        assert!(predict_delivery_time(&config, &query(-5.0, "truck", "normal", "clear")).is_err());
        assert!(
            predict_delivery_time(&config, &query(f64::NAN, "truck", "normal", "clear")).is_err()
        );
    }

    #[test]
    fn test_rejects_hours_beyond_u64() {
        let config = EstimatorConfig::default();

        assert!(matches!(
            predict_delivery_time(&config, &query(1e22, "truck", "normal", "clear")),
            Err(EstimatorError::OutOfRange { field: "hours", .. })
        ));
        assert!(predict_delivery_time(&config, &query(1e15, "truck", "normal", "clear")).is_ok());
    }

    #[test]
    fn test_optional_fields_default() {
        let query: DeliveryTimeQuery =
            serde_json::from_str(r#"{ "distance_km": 12.5, "vehicle_type": "van" }"#).unwrap();

        assert_eq!(query.traffic_condition, TrafficCondition::Normal);
        assert_eq!(query.weather, Weather::Clear);
    }
}
