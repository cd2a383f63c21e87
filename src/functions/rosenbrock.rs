//! Rosenbrock test function.

use crate::functions::util::square;
use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Rosenbrock function:
/// `sum 100 (x_{i+1} - x_i^2)^2 + (x_i - 1)^2`. Non-convex; global
/// minimum at the all-ones vector, plus a second catalogued minimum with
/// `x_0 = -1` for 4 <= d <= 7.
#[derive(Debug, Clone, Copy)]
pub struct Rosenbrock {
    dims: usize,
}

impl Rosenbrock {
    /// Create a Rosenbrock function of the given dimensionality (d >= 2).
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Objective for Rosenbrock {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Rosenbrock{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        (0..self.dims - 1)
            .map(|i| 100.0 * square(x[i + 1] - x[i] * x[i]) + square(x[i] - 1.0))
            .sum()
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        g.fill(0.0);
        for i in 0..self.dims - 1 {
            g[i] += 2.0 * (x[i] - 1.0);
            g[i] -= 400.0 * (x[i + 1] - x[i] * x[i]) * x[i];
            g[i + 1] += 200.0 * (x[i + 1] - x[i] * x[i]);
        }

        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.norm() < 2.4
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        let ones = Vector::from_element(self.dims, 1.0);
        if super::util::distance(x, &ones) < epsilon {
            return true;
        }

        if (4..=7).contains(&self.dims) {
            let mut other = ones;
            other[0] = -1.0;
            if super::util::distance(x, &other) < epsilon {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_minimum() {
        let rosenbrock = Rosenbrock::new(6);
        let xmin = Vector::from_element(6, 1.0);
        assert_eq!(rosenbrock.value(&xmin), 0.0);
        assert!(rosenbrock.is_minimum(&xmin, 1e-8));
    }

    #[test]
    fn test_banana_valley() {
        let rosenbrock = Rosenbrock::new(2);
        let x = Vector::from_vec(vec![-1.2, 1.0]);
        assert!((rosenbrock.value(&x) - 24.2).abs() < 1e-12);

        let mut g = Vector::zeros(2);
        rosenbrock.value_grad(&x, &mut g);
        // d/dx0 = 2(x0 - 1) - 400 (x1 - x0^2) x0 = -4.4 - 400*(-0.44)*(-1.2)
        assert!((g[0] - (-215.6)).abs() < 1e-10);
        assert!((g[1] - (-88.0)).abs() < 1e-10);
    }
}
