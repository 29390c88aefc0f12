use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stop on a route. Fields beyond `lat`, `lng` and `name` are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Waypoint {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Waypoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Waypoint {
            lat,
            lng,
            name: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn named(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Waypoint {
            name: Some(name.into()),
            ..Waypoint::new(lat, lng)
        }
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_coordinates_default_to_zero() {
        let waypoint: Waypoint = serde_json::from_str(r#"{ "name": "depot" }"#).unwrap();

        assert_eq!(waypoint, Waypoint::named(0.0, 0.0, "depot"));
    }

    #[test]
    fn test_extra_fields_are_preserved() {
        let waypoint: Waypoint =
            serde_json::from_str(r#"{ "lat": 21.0, "lng": 105.8, "order_id": "A-17" }"#).unwrap();

        assert_eq!(waypoint.extra["order_id"], "A-17");

        let json = serde_json::to_value(&waypoint).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "lat": 21.0, "lng": 105.8, "order_id": "A-17" })
        );
    }
}
