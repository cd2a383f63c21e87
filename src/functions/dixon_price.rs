//! Dixon-Price test function.

use crate::functions::util::square;
use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Dixon-Price function:
/// `(x_0 - 1)^2 + sum_i (i + 1) (2 x_i^2 - x_{i-1})^2`. Non-convex, with
/// minima that are awkward to enumerate, so the minimum check accepts any
/// point with a near-zero value.
#[derive(Debug, Clone, Copy)]
pub struct DixonPrice {
    dims: usize,
}

impl DixonPrice {
    /// Create a Dixon-Price function of the given dimensionality (d >= 2).
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for DixonPrice {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Dixon-Price{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        let mut fx = square(x[0] - 1.0);
        for i in 1..self.dims {
            fx += (i + 1) as Precision * square(2.0 * x[i] * x[i] - x[i - 1]);
        }
        fx
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        g.fill(0.0);
        g[0] = 2.0 * (x[0] - 1.0);
        for i in 1..self.dims {
            let weight = (i + 1) as Precision * 2.0 * (2.0 * x[i] * x[i] - x[i - 1]);
            g[i] += weight * 4.0 * x[i];
            g[i - 1] -= weight;
        }

        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.norm() < 10.0
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        self.value(x).abs() < epsilon
    }
}
