//! Scalar statistics accumulator.
//!
//! Tracks count, extrema, mean and variance incrementally (Welford's
//! update). The batch solvers feed it the per-iteration relative value
//! decrease to report the convergence speed of a run.

use crate::types::Precision;

/// Incremental statistics over a scalar stream: count, min, max, mean,
/// variance and standard deviation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    count: usize,
    min: Precision,
    max: Precision,
    mean: Precision,
    m2: Precision,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            min: Precision::INFINITY,
            max: Precision::NEG_INFINITY,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Fold a new value into the statistics.
    pub fn add(&mut self, value: Precision) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);

        let delta = value - self.mean;
        self.mean += delta / self.count as Precision;
        self.m2 += delta * (value - self.mean);
    }

    /// Fold a whole slice of values.
    pub fn add_all(&mut self, values: &[Precision]) {
        for &value in values {
            self.add(value);
        }
    }

    /// Whether any value has been recorded.
    pub fn valid(&self) -> bool {
        self.count != 0
    }

    /// Number of recorded values.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Smallest recorded value.
    pub fn min(&self) -> Precision {
        self.min
    }

    /// Largest recorded value.
    pub fn max(&self) -> Precision {
        self.max
    }

    /// Arithmetic mean of the recorded values.
    pub fn avg(&self) -> Precision {
        self.mean
    }

    /// Population variance of the recorded values.
    pub fn var(&self) -> Precision {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as Precision
        }
    }

    /// Population standard deviation of the recorded values.
    pub fn stdev(&self) -> Precision {
        self.var().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statistics() {
        let stats = Statistics::new();
        assert!(!stats.valid());
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.var(), 0.0);
    }

    #[test]
    fn test_moments() {
        let mut stats = Statistics::new();
        stats.add_all(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_eq!(stats.count(), 8);
        assert_eq!(stats.min(), 2.0);
        assert_eq!(stats.max(), 9.0);
        assert!((stats.avg() - 5.0).abs() < 1e-12);
        assert!((stats.var() - 4.0).abs() < 1e-12);
        assert!((stats.stdev() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_clear() {
        let mut stats = Statistics::new();
        stats.add(3.0);
        assert!(stats.valid());

        stats.clear();
        assert!(!stats.valid());
    }
}
