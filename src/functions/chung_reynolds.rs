//! Chung-Reynolds test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Chung-Reynolds function: `(x.x)^2`. Convex, minimum at the origin.
#[derive(Debug, Clone, Copy)]
pub struct ChungReynolds {
    dims: usize,
}

impl ChungReynolds {
    /// Create a Chung-Reynolds function of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for ChungReynolds {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Chung-Reynolds{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        let u = x.dot(x);
        u * u
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let u = x.dot(x);
        *g = x.scale(4.0 * u);
        u * u
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
