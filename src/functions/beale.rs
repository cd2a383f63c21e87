//! Beale test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Beale function: non-convex, 2D, global minimum at `(3, 0.5)`.
#[derive(Debug, Clone, Copy)]
pub struct Beale;

impl Objective for Beale {
    fn size(&self) -> usize {
        2
    }

    fn name(&self) -> String {
        "Beale".to_string()
    }

    fn value(&self, x: &Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        let (b2, b3) = (b * b, b * b * b);

        let z0 = 1.5 - a + a * b;
        let z1 = 2.25 - a + a * b2;
        let z2 = 2.625 - a + a * b3;

        z0 * z0 + z1 * z1 + z2 * z2
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        let (b2, b3) = (b * b, b * b * b);

        let z0 = 1.5 - a + a * b;
        let z1 = 2.25 - a + a * b2;
        let z2 = 2.625 - a + a * b3;

        g[0] = 2.0 * (z0 * (-1.0 + b) + z1 * (-1.0 + b2) + z2 * (-1.0 + b3));
        g[1] = 2.0 * (z0 * a + z1 * 2.0 * a * b + z2 * 3.0 * a * b2);

        z0 * z0 + z1 * z1 + z2 * z2
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 4.5
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn max_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::from_vec(vec![3.0, 0.5])) < epsilon
    }
}
