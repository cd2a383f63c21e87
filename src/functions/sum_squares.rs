//! Noisy quadratic sum-of-squares objective for the stochastic solvers.
//!
//! A set of `N` random centers defines the full-batch objective
//! `f(x) = 1/(2N) sum ||x - c_i||^2 + lambda/2 ||x||^2`; every gradient
//! call samples one center uniformly, giving an unbiased single-sample
//! sub-gradient. The randomness lives inside the objective, never in the
//! solver, so runs are reproducible given the seed.

use std::sync::Mutex;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::objective::Objective;
use crate::types::{Precision, Vector};

/// Noisy quadratic with `N` random centers in `[-1, 1]^d` and an `l2`
/// regularizer.
#[derive(Debug)]
pub struct SumSquares {
    dims: usize,
    lambda2: Precision,
    centers: Vec<Vector>,
    rng: Mutex<SmallRng>,
}

impl SumSquares {
    /// Create a sum-of-squares objective with `centers` random centers.
    pub fn new(dims: usize, centers: usize, lambda2: Precision, seed: u64) -> Self {
        assert!(centers > 0, "at least one center is required");

        let mut rng = SmallRng::seed_from_u64(seed);
        let centers = (0..centers)
            .map(|_| Vector::from_fn(dims, |_, _| rng.gen_range(-1.0..1.0)))
            .collect();

        Self {
            dims,
            lambda2,
            centers,
            rng: Mutex::new(rng),
        }
    }

    fn sample_center(&self) -> &Vector {
        let index = self
            .rng
            .lock()
            .expect("rng lock poisoned")
            .gen_range(0..self.centers.len());
        &self.centers[index]
    }
}

impl Objective for SumSquares {
    fn size(&self) -> usize {
        self.dims
    }

    fn name(&self) -> String {
        format!("SumSquares{}D", self.dims)
    }

    /// Full-batch value, deterministic.
    fn value(&self, x: &Vector) -> Precision {
        let total: Precision = self.centers.iter().map(|c| (x - c).norm_squared()).sum();
        total / (2.0 * self.centers.len() as Precision) + self.lambda2 * x.dot(x) / 2.0
    }

    /// Single-sample stochastic estimate: value and gradient of one
    /// uniformly drawn center (plus the regularizer).
    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        let center = self.sample_center();
        let diff = x - center;

        *g = &diff + x.scale(self.lambda2);

        diff.norm_squared() / 2.0 + self.lambda2 * x.dot(x) / 2.0
    }

    fn is_valid(&self, x: &Vector) -> bool {
        x.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_batch_value_is_deterministic() {
        let func = SumSquares::new(5, 20, 0.0, 42);
        let x = Vector::from_element(5, 0.5);
        assert_eq!(func.value(&x), func.value(&x));
    }

    #[test]
    fn test_stochastic_gradient_points_at_a_center() {
        let func = SumSquares::new(3, 10, 0.0, 7);
        let x = Vector::zeros(3);
        let mut g = Vector::zeros(3);
        func.value_grad(&x, &mut g);

        // the sampled gradient is x - c_i for some center
        assert!(func
            .centers
            .iter()
            .any(|c| ((-c) - &g).amax() < 1e-12));
    }

    #[test]
    fn test_same_seed_same_centers() {
        let a = SumSquares::new(4, 5, 0.1, 123);
        let b = SumSquares::new(4, 5, 0.1, 123);
        for (ca, cb) in a.centers.iter().zip(b.centers.iter()) {
            assert_eq!(ca, cb);
        }
    }
}
