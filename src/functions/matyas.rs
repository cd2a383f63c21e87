//! Matyas test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Matyas function: `0.26 (x^2 + y^2) - 0.48 x y`. Convex, minimum at the
/// origin.
#[derive(Debug, Clone, Copy)]
pub struct Matyas;

impl Objective for Matyas {
    fn size(&self) -> usize {
        2
    }

    fn name(&self) -> String {
        "Matyas".to_string()
    }

    fn value(&self, x: &Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        0.26 * (a * a + b * b) - 0.48 * a * b
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let (a, b) = (x[0], x[1]);

        g[0] = 0.52 * a - 0.48 * b;
        g[1] = 0.52 * b - 0.48 * a;

        0.26 * (a * a + b * b) - 0.48 * a * b
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 10.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn max_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(2)) < epsilon
    }
}
