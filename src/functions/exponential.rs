//! Exponential test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Exponential function: `exp(1 + x.x / d)`. Convex, minimum `e` at the
/// origin.
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    dims: usize,
}

impl Exponential {
    /// Create an exponential function of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for Exponential {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Exponential{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        (1.0 + x.dot(x) / self.dims as Precision).exp()
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let fx = self.value(x);
        *g = x.scale(2.0 * fx / self.dims as Precision);
        fx
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 1.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(self.dims)) < epsilon
    }
}
