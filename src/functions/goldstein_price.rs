//! Goldstein-Price test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Goldstein-Price function: non-convex, 2D, global minimum at `(0, -1)`
/// with several catalogued local minima.
#[derive(Debug, Clone, Copy)]
pub struct GoldsteinPrice;

impl GoldsteinPrice {
    fn parts(x: &Vector) -> (Precision, Precision, Precision, Precision) {
        let (a, b) = (x[0], x[1]);

        let z0 = 1.0 + a + b;
        let z1 = 19.0 - 14.0 * a + 3.0 * a * a - 14.0 * b + 6.0 * a * b + 3.0 * b * b;
        let z2 = 2.0 * a - 3.0 * b;
        let z3 = 18.0 - 32.0 * a + 12.0 * a * a + 48.0 * b - 36.0 * a * b + 27.0 * b * b;

        (z0, z1, z2, z3)
    }
}

impl Objective for GoldsteinPrice {
    fn size(&self) -> usize {
        2
    }

    fn name(&self) -> String {
        "Goldstein-Price".to_string()
    }

    fn value(&self, x: &Vector) -> Precision {
        let (z0, z1, z2, z3) = Self::parts(x);
        let u = 1.0 + z0 * z0 * z1;
        let v = 30.0 + z2 * z2 * z3;
        u * v
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        let (z0, z1, z2, z3) = Self::parts(x);

        let u = 1.0 + z0 * z0 * z1;
        let v = 30.0 + z2 * z2 * z3;

        let z1da = -14.0 + 6.0 * a + 6.0 * b;
        let z1db = z1da;
        let z3da = -32.0 + 24.0 * a - 36.0 * b;
        let z3db = 48.0 - 36.0 * a + 54.0 * b;

        g[0] = u * z2 * (2.0 * 2.0 * z3 + z2 * z3da) + v * z0 * (2.0 * z1 + z0 * z1da);
        g[1] = u * z2 * (2.0 * -3.0 * z3 + z2 * z3db) + v * z0 * (2.0 * z1 + z0 * z1db);

        u * v
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.norm() < 2.0
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn max_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::close_to_any(
            x,
            &[
                vec![0.0, -1.0],
                vec![1.2, 0.8],
                vec![1.8, 0.2],
                vec![-0.6, -0.4],
            ],
            epsilon,
        )
    }
}
