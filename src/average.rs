//! Incremental running averages over vectors.
//!
//! Two flavors back the stochastic solvers: a count-based arithmetic mean
//! (AdaGrad's squared-gradient accumulator) and an exponential moving
//! average with fixed momentum (AdaDelta, Adam, iterate averaging). Both
//! update element-wise in O(n).

use crate::types::{Precision, Vector};

/// Count-based arithmetic running mean of a vector stream.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningAverage {
    value: Vector,
    count: usize,
}

impl RunningAverage {
    /// Create a zero-initialized average of the given dimensionality.
    pub fn new(size: usize) -> Self {
        Self {
            value: Vector::zeros(size),
            count: 0,
        }
    }

    /// Fold a new sample into the mean.
    pub fn update(&mut self, x: &Vector) {
        self.count += 1;
        let k = 1.0 / self.count as Precision;
        self.value.axpy(k, x, 1.0 - k);
    }

    /// The current mean (zero before the first update).
    pub fn value(&self) -> &Vector {
        &self.value
    }

    /// Number of samples folded in so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Exponential moving average with fixed momentum `beta` in (0, 1),
/// zero-initialized: `v <- beta * v + (1 - beta) * x`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentumAverage {
    momentum: Precision,
    value: Vector,
}

impl MomentumAverage {
    /// Create a zero-initialized average with the given momentum.
    pub fn new(momentum: Precision, size: usize) -> Self {
        assert!(momentum > 0.0 && momentum < 1.0, "momentum must be in (0, 1)");
        Self {
            momentum,
            value: Vector::zeros(size),
        }
    }

    /// Fold a new sample into the average.
    pub fn update(&mut self, x: &Vector) {
        self.value.axpy(1.0 - self.momentum, x, self.momentum);
    }

    /// The current average.
    pub fn value(&self) -> &Vector {
        &self.value
    }

    /// The configured momentum.
    pub fn momentum(&self) -> Precision {
        self.momentum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_mean() {
        let mut avg = RunningAverage::new(2);
        avg.update(&Vector::from_vec(vec![1.0, 10.0]));
        avg.update(&Vector::from_vec(vec![3.0, 20.0]));
        avg.update(&Vector::from_vec(vec![5.0, 30.0]));

        assert_eq!(avg.count(), 3);
        assert!((avg.value()[0] - 3.0).abs() < 1e-12);
        assert!((avg.value()[1] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_ema_closed_form() {
        // After n identical updates with value v from zero, the average
        // equals v * (1 - beta^n).
        let beta = 0.9;
        let v = 4.0;
        let n = 17;

        let mut avg = MomentumAverage::new(beta, 3);
        for _ in 0..n {
            avg.update(&Vector::from_element(3, v));
        }

        let expected = v * (1.0 - beta.powi(n));
        for value in avg.value().iter() {
            assert!((value - expected).abs() < 1e-12);
        }
    }

    #[test]
    #[should_panic]
    fn test_ema_rejects_unit_momentum() {
        let _ = MomentumAverage::new(1.0, 2);
    }
}
