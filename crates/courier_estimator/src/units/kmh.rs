use std::ops::Div;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize, JsonSchema)]
pub struct Kmh(f64);

impl Kmh {
    pub const fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Slows a speed down by a combined condition multiplier.
impl Div<f64> for Kmh {
    type Output = Kmh;

    fn div(self, multiplier: f64) -> Kmh {
        Kmh(self.0 / multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_multiplier() {
        let speed = Kmh::new(60.0) / 1.2;
        assert!((speed.value() - 50.0).abs() < 1e-9);
    }
}
