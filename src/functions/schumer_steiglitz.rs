//! Schumer-Steiglitz test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Schumer-Steiglitz function: `sum x_i^4`. Convex, minimum at the origin.
#[derive(Debug, Clone, Copy)]
pub struct SchumerSteiglitz {
    dims: usize,
}

impl SchumerSteiglitz {
    /// Create a Schumer-Steiglitz function of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for SchumerSteiglitz {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Schumer-Steiglitz{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        x.iter()
            .map(|v| {
                let v2 = v * v;
                v2 * v2
            })
            .sum()
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        for (i, v) in x.iter().enumerate() {
            g[i] = 4.0 * v * v * v;
        }
        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 1e+6
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(self.dims)) < epsilon
    }
}
