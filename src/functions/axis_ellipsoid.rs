//! Axis-parallel hyper-ellipsoid test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Axis-parallel hyper-ellipsoid: `sum (i + 1) x_i^2`. Convex, minimum at
/// the origin.
#[derive(Debug, Clone, Copy)]
pub struct AxisEllipsoid {
    dims: usize,
}

impl AxisEllipsoid {
    /// Create an ellipsoid of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for AxisEllipsoid {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Axis Parallel Hyper-Ellipsoid{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        x.iter()
            .enumerate()
            .map(|(i, v)| (i + 1) as Precision * v * v)
            .sum()
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        for (i, v) in x.iter().enumerate() {
            g[i] = 2.0 * (i + 1) as Precision * v;
        }
        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.norm() < 100.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(self.dims)) < epsilon
    }
}
