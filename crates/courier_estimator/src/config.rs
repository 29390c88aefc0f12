use std::{fs::File, io::BufReader, path::Path};

use jiff::civil::Weekday;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    confidence::{ConfidenceStep, DistanceConfidence},
    delivery_time::{TrafficCondition, VehicleType, Weather},
    error::ConfigError,
    shipping_cost::CarrierType,
    units::{kilometers::Kilometers, kmh::Kmh},
};

/// Every lookup table and constant the estimator reads. Built once and shared
/// read-only between callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EstimatorConfig {
    pub vehicle_speeds: VehicleSpeeds,
    pub traffic_multipliers: TrafficMultipliers,
    pub weather_multipliers: WeatherMultipliers,
    /// Loading and unloading time added to every delivery.
    pub handling_buffer_minutes: u32,
    pub delivery_confidence: DistanceConfidence,

    pub carrier_rates: CarrierRates,
    /// Currency units per cubic meter.
    pub volume_rate: f64,
    /// Currency units per kilogram.
    pub weight_rate: f64,
    /// Ratio of the subtotal added for remote areas.
    pub remote_surcharge: f64,
    pub cost_confidence: DistanceConfidence,

    /// Orders per day before the weekday adjustment.
    pub base_demand: u32,
    pub weekday_multipliers: WeekdayMultipliers,
    pub demand_confidence: f64,

    pub route_average_speed: Kmh,
    pub earth_radius: Kilometers,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            vehicle_speeds: VehicleSpeeds::default(),
            traffic_multipliers: TrafficMultipliers::default(),
            weather_multipliers: WeatherMultipliers::default(),
            handling_buffer_minutes: 30,
            delivery_confidence: DistanceConfidence {
                steps: vec![
                    ConfidenceStep {
                        below_km: 50.0,
                        confidence: 0.85,
                    },
                    ConfidenceStep {
                        below_km: 200.0,
                        confidence: 0.75,
                    },
                ],
                otherwise: 0.65,
            },
            carrier_rates: CarrierRates::default(),
            volume_rate: 50_000.0,
            weight_rate: 1_000.0,
            remote_surcharge: 0.3,
            cost_confidence: DistanceConfidence {
                steps: vec![ConfidenceStep {
                    below_km: 300.0,
                    confidence: 0.80,
                }],
                otherwise: 0.70,
            },
            base_demand: 50,
            weekday_multipliers: WeekdayMultipliers::default(),
            demand_confidence: 0.70,
            route_average_speed: Kmh::new(50.0),
            earth_radius: Kilometers::new(6371.0),
        }
    }
}

impl EstimatorConfig {
    /// Reads a JSON config file. Omitted fields keep their default value.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VehicleSpeeds {
    pub truck: Kmh,
    pub van: Kmh,
    pub motorcycle: Kmh,
    pub fallback: Kmh,
}

impl Default for VehicleSpeeds {
    fn default() -> Self {
        VehicleSpeeds {
            truck: Kmh::new(50.0),
            van: Kmh::new(60.0),
            motorcycle: Kmh::new(40.0),
            fallback: Kmh::new(50.0),
        }
    }
}

impl VehicleSpeeds {
    pub fn resolve(&self, vehicle_type: &VehicleType) -> Kmh {
        match vehicle_type {
            VehicleType::Truck => self.truck,
            VehicleType::Van => self.van,
            VehicleType::Motorcycle => self.motorcycle,
            VehicleType::Unknown(value) => {
                debug!(vehicle_type = %value, "unknown vehicle type, using fallback speed");
                self.fallback
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TrafficMultipliers {
    pub low: f64,
    pub normal: f64,
    pub high: f64,
    pub fallback: f64,
}

impl Default for TrafficMultipliers {
    fn default() -> Self {
        TrafficMultipliers {
            low: 1.0,
            normal: 1.3,
            high: 1.8,
            fallback: 1.3,
        }
    }
}

impl TrafficMultipliers {
    pub fn resolve(&self, traffic: &TrafficCondition) -> f64 {
        match traffic {
            TrafficCondition::Low => self.low,
            TrafficCondition::Normal => self.normal,
            TrafficCondition::High => self.high,
            TrafficCondition::Unknown(value) => {
                debug!(traffic_condition = %value, "unknown traffic condition, using fallback multiplier");
                self.fallback
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeatherMultipliers {
    pub clear: f64,
    pub rain: f64,
    pub fog: f64,
    pub fallback: f64,
}

impl Default for WeatherMultipliers {
    fn default() -> Self {
        WeatherMultipliers {
            clear: 1.0,
            rain: 1.2,
            fog: 1.4,
            fallback: 1.0,
        }
    }
}

impl WeatherMultipliers {
    pub fn resolve(&self, weather: &Weather) -> f64 {
        match weather {
            Weather::Clear => self.clear,
            Weather::Rain => self.rain,
            Weather::Fog => self.fog,
            Weather::Unknown(value) => {
                debug!(weather = %value, "unknown weather, using fallback multiplier");
                self.fallback
            }
        }
    }
}

/// Per kilometer rates of each carrier tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CarrierRates {
    pub standard: f64,
    pub express: f64,
    pub premium: f64,
    pub fallback: f64,
}

impl Default for CarrierRates {
    fn default() -> Self {
        CarrierRates {
            standard: 5_000.0,
            express: 8_000.0,
            premium: 12_000.0,
            fallback: 5_000.0,
        }
    }
}

impl CarrierRates {
    pub fn resolve(&self, carrier_type: &CarrierType) -> f64 {
        match carrier_type {
            CarrierType::Standard => self.standard,
            CarrierType::Express => self.express,
            CarrierType::Premium => self.premium,
            CarrierType::Unknown(value) => {
                debug!(carrier_type = %value, "unknown carrier type, using fallback rate");
                self.fallback
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeekdayMultipliers {
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
    pub sunday: f64,
}

impl Default for WeekdayMultipliers {
    fn default() -> Self {
        WeekdayMultipliers {
            monday: 1.0,
            tuesday: 1.1,
            wednesday: 1.2,
            thursday: 1.15,
            friday: 1.3,
            saturday: 0.8,
            sunday: 0.5,
        }
    }
}

impl WeekdayMultipliers {
    pub fn resolve(&self, weekday: Weekday) -> f64 {
        match weekday {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EstimatorConfig = serde_json::from_str(
            r#"{ "volume_rate": 1.0, "vehicle_speeds": { "van": 70.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.volume_rate, 1.0);
        assert_eq!(config.vehicle_speeds.van, Kmh::new(70.0));
        assert_eq!(config.vehicle_speeds.truck, Kmh::new(50.0));
        assert_eq!(config.weight_rate, 1_000.0);
        assert_eq!(config.handling_buffer_minutes, 30);
    }

    #[test]
    fn test_default_round_trips_through_json() {
        let config = EstimatorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EstimatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_categories_fall_back() {
        let config = EstimatorConfig::default();

        assert_eq!(
            config.vehicle_speeds.resolve(&VehicleType::from("drone")),
            Kmh::new(50.0)
        );
        assert_eq!(
            config
                .traffic_multipliers
                .resolve(&TrafficCondition::from("gridlock")),
            1.3
        );
        assert_eq!(config.weather_multipliers.resolve(&Weather::from("snow")), 1.0);
        assert_eq!(
            config.carrier_rates.resolve(&CarrierType::from("overnight")),
            5_000.0
        );
    }

    #[test]
    fn test_weekday_multipliers() {
        let multipliers = WeekdayMultipliers::default();
        assert_eq!(multipliers.resolve(Weekday::Friday), 1.3);
        assert_eq!(multipliers.resolve(Weekday::Sunday), 0.5);
    }
}
