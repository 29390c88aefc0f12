use thiserror::Error;

/// Rejected estimator input. Unknown categories are never an error; they fall
/// back to the configured default.
#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("distance_km must be a positive finite number, got {0}")]
    InvalidDistance(f64),
    #[error("{field} must be a non-negative finite number, got {value}")]
    NegativeQuantity { field: &'static str, value: f64 },
    #[error("{field} of {value} does not fit in a whole number result")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: jiff::Error,
    },
    #[error("waypoint {index} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate { index: usize, lat: f64, lng: f64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read estimator config file")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse estimator config file")]
    Parse(#[from] serde_json::Error),
}
