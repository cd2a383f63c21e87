//! Rotated hyper-ellipsoid test function.

use crate::functions::util::square;
use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Rotated hyper-ellipsoid: `sum_i (sum_{j<=i} x_j)^2`. Convex, minimum
/// at the origin.
#[derive(Debug, Clone, Copy)]
pub struct RotatedEllipsoid {
    dims: usize,
}

impl RotatedEllipsoid {
    /// Create a rotated ellipsoid of the given dimensionality.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for RotatedEllipsoid {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Rotated Hyper-Ellipsoid{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        let mut fx = 0.0;
        let mut prefix = 0.0;
        for v in x.iter() {
            prefix += v;
            fx += square(prefix);
        }
        fx
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let mut fx = 0.0;
        let mut prefix = 0.0;
        for (i, v) in x.iter().enumerate() {
            prefix += v;
            fx += square(prefix);
            g[i] = 2.0 * prefix;
        }

        // suffix-sum the partial derivatives
        for i in (0..self.dims.saturating_sub(1)).rev() {
            g[i] += g[i + 1];
        }

        fx
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::central_difference;

    #[test]
    fn test_gradient_matches_finite_differences() {
        let func = RotatedEllipsoid::new(5);
        let x = Vector::from_vec(vec![0.3, -1.0, 2.0, 0.1, -0.7]);

        let mut g = Vector::zeros(5);
        func.value_grad(&x, &mut g);
        assert!((g - central_difference(&func, &x)).amax() < 1e-6);
    }
}
