use crate::error::EstimatorError;

/// Rounds half away from zero to the given number of decimals.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Floors to a whole number, refusing values a `u64` cannot hold instead of
/// saturating.
pub(crate) fn floor_to_u64(field: &'static str, value: f64) -> Result<u64, EstimatorError> {
    // `u64::MAX as f64` rounds up to 2^64, which is already out of range.
    if value < u64::MAX as f64 {
        Ok(value.floor() as u64)
    } else {
        Err(EstimatorError::OutOfRange { field, value })
    }
}
