//! Styblinski-Tang test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Styblinski-Tang function: `sum x_i^4 - 16 x_i^2 + 5 x_i`. Non-convex;
/// every coordinate settles near `-2.9035` (global) or `+2.7468` (local).
#[derive(Debug, Clone, Copy)]
pub struct StyblinskiTang {
    dims: usize,
}

impl StyblinskiTang {
    /// Create a Styblinski-Tang function of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for StyblinskiTang {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Styblinski-Tang{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        x.iter()
            .map(|v| {
                let v2 = v * v;
                v2 * v2 - 16.0 * v2 + 5.0 * v
            })
            .sum()
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        for (i, v) in x.iter().enumerate() {
            g[i] = 4.0 * v * v * v - 32.0 * v + 5.0;
        }
        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 5.0
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        let u1 = -2.903_534_0;
        let u2 = 2.746_802_7;
        x.iter()
            .all(|v| (v - u1).abs() < epsilon || (v - u2).abs() < epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationary_coordinates() {
        let func = StyblinskiTang::new(2);
        let xmin = Vector::from_element(2, -2.903_534_0);

        let mut g = Vector::zeros(2);
        func.value_grad(&xmin, &mut g);
        assert!(g.amax() < 1e-4);
        assert!(func.is_minimum(&xmin, 1e-6));
    }
}
