//! Trid test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Trid function:
/// `sum (x_i - 1)^2 - sum x_i x_{i-1}`. Convex, with the known minimum
/// `x_i = (i + 1)(d - i)` (zero-based) and value `-d (d + 4)(d - 1) / 6`.
#[derive(Debug, Clone, Copy)]
pub struct Trid {
    dims: usize,
}

impl Trid {
    /// Create a Trid function of the given dimensionality (d >= 2).
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for Trid {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Trid{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        let squares: Precision = x.iter().map(|v| (v - 1.0) * (v - 1.0)).sum();
        let cross: Precision = (1..self.dims).map(|i| x[i] * x[i - 1]).sum();
        squares - cross
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        for i in 0..self.dims {
            g[i] = 2.0 * (x[i] - 1.0);
            if i > 0 {
                g[i] -= x[i - 1];
            }
            if i + 1 < self.dims {
                g[i] -= x[i + 1];
            }
        }

        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.norm() < 1.0 + (self.dims * self.dims) as Precision
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        let xmin = Vector::from_fn(self.dims, |i, _| {
            ((i + 1) * (self.dims - i)) as Precision
        });
        super::util::distance(x, &xmin) < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_minimum() {
        let trid = Trid::new(5);
        let d = 5.0;
        let xmin = Vector::from_fn(5, |i, _| ((i + 1) * (5 - i)) as Precision);

        let expected = -d * (d + 4.0) * (d - 1.0) / 6.0;
        assert!((trid.value(&xmin) - expected).abs() < 1e-10);

        let mut g = Vector::zeros(5);
        trid.value_grad(&xmin, &mut g);
        assert!(g.amax() < 1e-10);

        assert!(trid.is_minimum(&xmin, 1e-8));
    }
}
