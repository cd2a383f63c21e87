//! Booth test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Booth function: `(x + 2y - 7)^2 + (2x + y - 5)^2`, minimum at `(1, 3)`.
#[derive(Debug, Clone, Copy)]
pub struct Booth;

impl Objective for Booth {
    fn size(&self) -> usize {
        2
    }

    fn name(&self) -> String {
        "Booth".to_string()
    }

    fn value(&self, x: &Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        let u = a + 2.0 * b - 7.0;
        let v = 2.0 * a + b - 5.0;
        u * u + v * v
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        let u = a + 2.0 * b - 7.0;
        let v = 2.0 * a + b - 5.0;

        g[0] = 2.0 * u + 4.0 * v;
        g[1] = 4.0 * u + 2.0 * v;

        u * u + v * v
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 10.0
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn max_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::from_vec(vec![1.0, 3.0])) < epsilon
    }
}
