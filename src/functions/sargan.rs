//! Sargan test function.

use crate::functions::util::square;
use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Sargan function: `0.6 sum x_i^2 + 0.4 (sum x_i)^2`. Convex, minimum at
/// the origin.
#[derive(Debug, Clone, Copy)]
pub struct Sargan {
    dims: usize,
}

impl Sargan {
    /// Create a Sargan function of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for Sargan {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Sargan{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        0.6 * x.dot(x) + 0.4 * square(x.sum())
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let total = x.sum();
        for (i, v) in x.iter().enumerate() {
            g[i] = 1.2 * v + 0.8 * total;
        }
        self.value(x)
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(self.dims)) < epsilon
    }
}
