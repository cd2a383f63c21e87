//! Three-hump camel test function.

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Three-hump camel function:
/// `2x^2 - 1.05x^4 + x^6/6 + xy + y^2`, global minimum at the origin.
#[derive(Debug, Clone, Copy)]
pub struct ThreeHumpCamel;

impl Objective for ThreeHumpCamel {
    fn size(&self) -> usize {
        2
    }

    fn name(&self) -> String {
        "3hump camel".to_string()
    }

    fn value(&self, x: &Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        let a2 = a * a;
        let a4 = a2 * a2;
        let a6 = a4 * a2;

        2.0 * a2 - 1.05 * a4 + a6 / 6.0 + a * b + b * b
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let (a, b) = (x[0], x[1]);
        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a2 * a2;
        let a5 = a4 * a;
        let a6 = a4 * a2;

        g[0] = 4.0 * a - 4.2 * a3 + a5 + b;
        g[1] = a + 2.0 * b;

        2.0 * a2 - 1.05 * a4 + a6 / 6.0 + a * b + b * b
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 5.0
    }

    fn min_dims(&self) -> usize {
        2
    }

    fn max_dims(&self) -> usize {
        2
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        // the global minimum plus the two local humps
        super::util::close_to_any(
            x,
            &[
                vec![0.0, 0.0],
                vec![1.747_755_1, -0.873_877_6],
                vec![-1.747_755_1, 0.873_877_6],
            ],
            epsilon,
        )
    }
}
