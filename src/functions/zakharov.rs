//! Zakharov test function.

use crate::functions::util::{cube, quartic, square};
use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Zakharov function:
/// `x.x + (b.x)^2 + (b.x)^4` with `b_i = (i + 1) / 2`. Convex, minimum at
/// the origin.
#[derive(Debug, Clone)]
pub struct Zakharov {
    dims: usize,
    bias: Vector,
}

impl Zakharov {
    /// Create a Zakharov function of the given dimensionality (d >= 2).
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            bias: Vector::from_fn(dims, |i, _| (i + 1) as Precision / 2.0),
        }
    }
}

impl Objective for Zakharov {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Zakharov{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        let u = x.dot(x);
        let v = self.bias.dot(x);
        u + square(v) + quartic(v)
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let v = self.bias.dot(x);

        *g = x.scale(2.0) + self.bias.scale(2.0 * v + 4.0 * cube(v));

        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 5.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(self.dims)) < epsilon
    }
}
