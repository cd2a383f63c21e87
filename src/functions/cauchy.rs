//! Cauchy test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Cauchy function: `sum log(1 + x_i^2)`. Convex on the unit ball, which
/// is its declared domain.
#[derive(Debug, Clone, Copy)]
pub struct Cauchy {
    dims: usize,
}

impl Cauchy {
    /// Create a Cauchy function of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for Cauchy {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Cauchy{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        x.iter().map(|v| (1.0 + v * v).ln()).sum()
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        for (i, v) in x.iter().enumerate() {
            g[i] = 2.0 * v / (1.0 + v * v);
        }
        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.norm() < 1.0
    }

    fn is_convex(&self) -> bool {
        true // in the [-1, +1] interval
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(self.dims)) < epsilon
    }
}
