//! McCormick test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// McCormick function:
/// `sin(x + y) + (x - y)^2 - 1.5x + 2.5y + 1`, minimum near
/// `(-0.547, -1.547)`.
#[derive(Debug, Clone, Copy)]
pub struct McCormick;

impl Objective for McCormick {
    fn size(&self) -> usize {
        2
    }

    fn name(&self) -> String {
        "McCormick".to_string()
    }

    fn value(&self, x: &Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        (a + b).sin() + (a - b) * (a - b) - 1.5 * a + 2.5 * b + 1.0
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let (a, b) = (x[0], x[1]);

        g[0] = (a + b).cos() + 2.0 * (a - b) - 1.5;
        g[1] = (a + b).cos() - 2.0 * (a - b) + 2.5;

        (a + b).sin() + (a - b) * (a - b) - 1.5 * a + 2.5 * b + 1.0
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 4.0
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn max_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::from_vec(vec![-0.547_197_55, -1.547_197_55])) < epsilon
    }
}
