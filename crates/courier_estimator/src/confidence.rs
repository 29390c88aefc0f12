use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::utils::round::round_to;

/// Rule-based certainty of an estimate. Always within `[0, 1]` and rounded to
/// two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Self {
        Confidence(round_to(value.clamp(0.0, 1.0), 2))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// A confidence that steps down as the distance grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DistanceConfidence {
    /// Checked in order; the first step whose bound exceeds the distance wins.
    pub steps: Vec<ConfidenceStep>,
    pub otherwise: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfidenceStep {
    pub below_km: f64,
    pub confidence: f64,
}

impl DistanceConfidence {
    pub fn resolve(&self, distance_km: f64) -> Confidence {
        let value = self
            .steps
            .iter()
            .find(|step| distance_km < step.below_km)
            .map_or(self.otherwise, |step| step.confidence);

        Confidence::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery_steps() -> DistanceConfidence {
        DistanceConfidence {
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
        }
    }

    #[test]
    fn test_step_boundaries() {
        let steps = delivery_steps();
        assert_eq!(steps.resolve(49.99).value(), 0.85);
        assert_eq!(steps.resolve(50.0).value(), 0.75);
        assert_eq!(steps.resolve(199.0).value(), 0.75);
        assert_eq!(steps.resolve(200.0).value(), 0.65);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
    }
}
