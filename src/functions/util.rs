//! Small numeric helpers shared by the analytic test functions.

use num_traits::Float;

use crate::types::{Precision, Vector};

/// `x^2`
pub fn square<T: Float>(x: T) -> T {
    x * x
}

/// `x^3`
pub fn cube<T: Float>(x: T) -> T {
    x * x * x
}

/// `x^4`
pub fn quartic<T: Float>(x: T) -> T {
    square(square(x))
}

/// Euclidean distance between two points.
pub fn distance(x: &Vector, y: &Vector) -> Precision {
    (x - y).norm()
}

/// Whether `x` is within `epsilon` (Euclidean) of any of the given points.
pub fn close_to_any(x: &Vector, points: &[Vec<Precision>], epsilon: Precision) -> bool {
    points.iter().any(|p| {
        let xmin = Vector::from_vec(p.clone());
        distance(x, &xmin) < epsilon
    })
}
