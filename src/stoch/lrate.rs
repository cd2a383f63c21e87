//! Decaying learning-rate schedule for stochastic solvers.

use crate::types::Precision;

/// Learning rate `alpha = alpha0 / (k + 1)^decay` for iteration `k`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearningRate {
    alpha0: Precision,
    decay: Precision,
}

impl LearningRate {
    /// Create a schedule with initial rate `alpha0 > 0` and
    /// `decay` in [0, 1].
    pub fn new(alpha0: Precision, decay: Precision) -> Self {
        assert!(alpha0 > 0.0, "alpha0 must be positive");
        assert!((0.0..=1.0).contains(&decay), "decay must be in [0, 1]");
        Self { alpha0, decay }
    }

    /// The learning rate for iteration `k` (zero-based).
    pub fn get(&self, k: usize) -> Precision {
        self.alpha0 / ((k + 1) as Precision).powf(self.decay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_decay_is_constant() {
        let lrate = LearningRate::new(0.5, 0.0);
        assert_eq!(lrate.get(0), 0.5);
        assert_eq!(lrate.get(1000), 0.5);
    }

    #[test]
    fn test_full_decay_is_harmonic() {
        let lrate = LearningRate::new(1.0, 1.0);
        assert_eq!(lrate.get(0), 1.0);
        assert_eq!(lrate.get(1), 0.5);
        assert_eq!(lrate.get(9), 0.1);
    }

    #[test]
    #[should_panic]
    fn test_negative_decay_is_rejected() {
        let _ = LearningRate::new(1.0, -0.1);
    }
}
