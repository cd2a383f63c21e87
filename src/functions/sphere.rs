//! Sphere test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Sphere function `f(x) = x.x`: the simplest convex benchmark.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    dims: usize,
}

impl Sphere {
    /// Create a sphere of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for Sphere {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Sphere{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        x.dot(x)
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        *g = x.scale(2.0);
        x.dot(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 5.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(self.dims)) < epsilon
    }
}
