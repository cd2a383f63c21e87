//! Colville test function.

use crate::functions::util::square;
use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Colville function: non-convex, fixed 4D, global minimum at `(1,1,1,1)`.
#[derive(Debug, Clone, Copy)]
pub struct Colville;

impl Objective for Colville {
    fn size(&self) -> usize {
        4
    }

    fn name(&self) -> String {
        "Colville".to_string()
    }

    fn value(&self, x: &Vector) -> Precision {
        let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);

        100.0 * square(x1 * x1 - x2)
            + square(x1 - 1.0)
            + square(x3 - 1.0)
            + 90.0 * square(x3 * x3 - x4)
            + 10.1 * square(x2 - 1.0)
            + 10.1 * square(x4 - 1.0)
            + 19.8 * (x2 - 1.0) * (x4 - 1.0)
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);

        g[0] = 400.0 * (x1 * x1 - x2) * x1 + 2.0 * (x1 - 1.0);
        g[1] = -200.0 * (x1 * x1 - x2) + 20.2 * (x2 - 1.0) + 19.8 * (x4 - 1.0);
        g[2] = 360.0 * (x3 * x3 - x4) * x3 + 2.0 * (x3 - 1.0);
        g[3] = -180.0 * (x3 * x3 - x4) + 20.2 * (x4 - 1.0) + 19.8 * (x2 - 1.0);

        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 10.0
    }

    fn min_dims(&self) -> usize {
        4
    }

    fn max_dims(&self) -> usize {
        4
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::from_element(4, 1.0)) < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_minimum() {
        let xmin = Vector::from_element(4, 1.0);
        assert_eq!(Colville.value(&xmin), 0.0);

        let mut g = Vector::zeros(4);
        Colville.value_grad(&xmin, &mut g);
        assert!(g.amax() < 1e-12);
    }
}
