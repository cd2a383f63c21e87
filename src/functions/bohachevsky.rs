//! The Bohachevsky family of test functions.

use core::f64::consts::PI;

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// The three Bohachevsky variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BohachevskyType {
    /// `x^2 + 2y^2 - 0.3 cos(3 pi x) - 0.4 cos(4 pi y) + 0.7`
    One,
    /// `x^2 + 2y^2 - 0.3 cos(3 pi x) cos(4 pi y) + 0.3`
    Two,
    /// `x^2 + 2y^2 - 0.3 cos(3 pi x + 4 pi y) + 0.3`
    Three,
}

/// Bohachevsky function: non-convex, 2D, many local minima; the global
/// minimum of every variant sits at the origin with value zero.
#[derive(Debug, Clone, Copy)]
pub struct Bohachevsky {
    variant: BohachevskyType,
}

impl Bohachevsky {
    /// Create the given variant.
    pub fn new(variant: BohachevskyType) -> Self {
        Self { variant }
    }
}

impl Objective for Bohachevsky {
    fn size(&self) -> usize {
        2
    }

    fn name(&self) -> String {
        match self.variant {
            BohachevskyType::One => "Bohachevsky1".to_string(),
            BohachevskyType::Two => "Bohachevsky2".to_string(),
            BohachevskyType::Three => "Bohachevsky3".to_string(),
        }
    }

    fn value(&self, x: &Vector) -> Precision {
        let (x1, x2) = (x[0], x[1]);
        let p1 = 3.0 * PI * x1;
        let p2 = 4.0 * PI * x2;
        let u = x1 * x1 + 2.0 * x2 * x2;

        match self.variant {
            BohachevskyType::One => u - 0.3 * p1.cos() - 0.4 * p2.cos() + 0.7,
            BohachevskyType::Two => u - 0.3 * p1.cos() * p2.cos() + 0.3,
            BohachevskyType::Three => u - 0.3 * (p1 + p2).cos() + 0.3,
        }
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let (x1, x2) = (x[0], x[1]);
        let p1 = 3.0 * PI * x1;
        let p2 = 4.0 * PI * x2;

        match self.variant {
            BohachevskyType::One => {
                g[0] = 2.0 * x1 + 0.9 * PI * p1.sin();
                g[1] = 4.0 * x2 + 1.6 * PI * p2.sin();
            }
            BohachevskyType::Two => {
                g[0] = 2.0 * x1 + 0.9 * PI * p1.sin() * p2.cos();
                g[1] = 4.0 * x2 + 1.2 * PI * p2.sin() * p1.cos();
            }
            BohachevskyType::Three => {
                g[0] = 2.0 * x1 + 0.9 * PI * (p1 + p2).sin();
                g[1] = 4.0 * x2 + 1.2 * PI * (p1 + p2).sin();
            }
        }

        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 100.0
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn max_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        // plenty of local minima are hard to catalogue; accept any
        // near-zero stationary value
        self.value(x).abs() < epsilon || super::util::distance(x, &Vector::zeros(2)) < epsilon
    }
}
