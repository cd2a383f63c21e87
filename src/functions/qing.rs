//! Qing test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Qing function: `sum (x_i^2 - (i + 1))^2`. Non-convex; every
/// `x_i = +-sqrt(i + 1)` is a global minimum.
#[derive(Debug, Clone, Copy)]
pub struct Qing {
    dims: usize,
}

impl Qing {
    /// Create a Qing function of the given dimensionality (d >= 2).
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for Qing {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Qing{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        x.iter()
            .enumerate()
            .map(|(i, v)| {
                let u = v * v - (i + 1) as Precision;
                u * u
            })
            .sum()
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        for (i, v) in x.iter().enumerate() {
            g[i] = 4.0 * (v * v - (i + 1) as Precision) * v;
        }
        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.norm() < self.dims as Precision
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        x.iter()
            .enumerate()
            .all(|(i, v)| (v * v - (i + 1) as Precision).abs() < epsilon)
    }
}
