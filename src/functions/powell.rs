//! Powell test function.

use crate::functions::util::{cube, quartic, square};
use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Powell's singular function over groups of four coordinates. Convex,
/// minimum at the origin; the dimensionality is rounded down to a
/// multiple of four.
#[derive(Debug, Clone, Copy)]
pub struct Powell {
    dims: usize,
}

impl Powell {
    /// Create a Powell function; `dims` is rounded down to a multiple of
    /// four, with a floor of four.
    pub fn new(dims: usize) -> Self {
        Self {
            dims: (dims - dims % 4).max(4),
        }
    }
}

impl Objective for Powell {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("Powell{}D", self.dims)
    }

    fn value(&self, x: &Vector) -> Precision {
        let mut fx = 0.0;
        for i4 in (0..self.dims).step_by(4) {
            fx += square(x[i4] + 10.0 * x[i4 + 1]);
            fx += 5.0 * square(x[i4 + 2] - x[i4 + 3]);
            fx += quartic(x[i4 + 1] - 2.0 * x[i4 + 2]);
            fx += 10.0 * quartic(x[i4] - x[i4 + 3]);
        }
        fx
    }

    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        for i4 in (0..self.dims).step_by(4) {
            let gfx1 = 2.0 * (x[i4] + 10.0 * x[i4 + 1]);
            let gfx2 = 10.0 * (x[i4 + 2] - x[i4 + 3]);
            let gfx3 = 4.0 * cube(x[i4 + 1] - 2.0 * x[i4 + 2]);
            let gfx4 = 40.0 * cube(x[i4] - x[i4 + 3]);

            g[i4] = gfx1 + gfx4;
            g[i4 + 1] = 10.0 * gfx1 + gfx3;
            g[i4 + 2] = gfx2 - 2.0 * gfx3;
            g[i4 + 3] = -gfx2 - gfx4;
        }

        self.value(x)
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.amax() < 4.0
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn min_dims(&self) -> usize {
        4
    }

    fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        super::util::distance(x, &Vector::zeros(self.dims)) < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims_round_down_to_multiple_of_four() {
        assert_eq!(Powell::new(4).size(), 4);
        assert_eq!(Powell::new(7).size(), 4);
        assert_eq!(Powell::new(11).size(), 8);
    }

    #[test]
    fn test_origin_is_minimum() {
        let powell = Powell::new(8);
        assert_eq!(powell.value(&Vector::zeros(8)), 0.0);
    }
}
