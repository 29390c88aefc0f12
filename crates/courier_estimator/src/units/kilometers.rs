use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, Sub},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::units::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize, JsonSchema)]
pub struct Kilometers(f64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0.0);

    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 + other.0)
    }
}

impl AddAssign for Kilometers {
    fn add_assign(&mut self, other: Kilometers) {
        self.0 += other.0;
    }
}

impl Sub for Kilometers {
    type Output = Kilometers;

    fn sub(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 - other.0)
    }
}

/// Travel time in fractional hours.
impl Div<Kmh> for Kilometers {
    type Output = f64;

    fn div(self, speed: Kmh) -> f64 {
        self.0 / speed.value()
    }
}

impl Div<Kilometers> for Kilometers {
    type Output = f64;

    fn div(self, other: Kilometers) -> f64 {
        self.0 / other.0
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Kilometers>>(iter: I) -> Kilometers {
        iter.fold(Kilometers::ZERO, |acc, x| acc + x)
    }
}
