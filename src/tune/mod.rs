//! Hyper-parameter tuning: compositional search over finite and
//! grid-refinable spaces.
//!
//! `tune*` evaluates a trial operator over every Cartesian combination
//! drawn from the spaces' current values, refines the best-performing
//! space and repeats until no space asks for another round. Sweeps are
//! deterministic (lexicographic by argument position), so tuning the same
//! operator twice yields bit-for-bit identical results.

use crate::types::Precision;

pub mod space;

pub use space::{FiniteSpace, GridSpace, Mapping};

/// A one-dimensional search space over scalar parameter values.
pub trait SearchSpace: Clone {
    /// The current candidate values, in sweep order.
    fn values(&self) -> Vec<Precision>;

    /// Shrink the space around the optimum; returns false when the space
    /// is exhausted.
    fn refine(&mut self, optimum: Precision) -> bool;
}

/// Result of a tuning run: the best trial outcome and the parameter tuple
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuned<P> {
    /// The optimum trial value
    pub optimum: Precision,
    /// The winning parameters
    pub params: P,
}

/// Rank a trial outcome, demoting non-finite values to `+inf`.
fn rank(value: Precision) -> Precision {
    if value.is_finite() {
        value
    } else {
        Precision::INFINITY
    }
}

/// Search the parameter minimizing `op` over one space.
pub fn tune<S, F>(mut op: F, mut space: S) -> Tuned<Precision>
where
    S: SearchSpace,
    F: FnMut(Precision) -> Precision,
{
    let mut best: Option<Tuned<Precision>> = None;

    loop {
        for param in space.values() {
            let value = rank(op(param));
            if best.as_ref().map_or(true, |b| value < b.optimum) {
                best = Some(Tuned {
                    optimum: value,
                    params: param,
                });
            }
        }

        let current = best.as_ref().expect("search space must not be empty");
        if !space.refine(current.params) {
            break;
        }
    }

    best.expect("search space must not be empty")
}

/// Search the parameter pair minimizing `op` over two spaces.
pub fn tune2<S1, S2, F>(mut op: F, mut space1: S1, space2: S2) -> Tuned<(Precision, Precision)>
where
    S1: SearchSpace,
    S2: SearchSpace,
    F: FnMut(Precision, Precision) -> Precision,
{
    let mut best: Option<Tuned<(Precision, Precision)>> = None;

    loop {
        for param1 in space1.values() {
            let inner = tune(|param2| op(param1, param2), space2.clone());
            if best.as_ref().map_or(true, |b| inner.optimum < b.optimum) {
                best = Some(Tuned {
                    optimum: inner.optimum,
                    params: (param1, inner.params),
                });
            }
        }

        let current = best.as_ref().expect("search space must not be empty");
        if !space1.refine(current.params.0) {
            break;
        }
    }

    best.expect("search space must not be empty")
}

/// Search the parameter triple minimizing `op` over three spaces.
pub fn tune3<S1, S2, S3, F>(
    mut op: F,
    mut space1: S1,
    space2: S2,
    space3: S3,
) -> Tuned<(Precision, Precision, Precision)>
where
    S1: SearchSpace,
    S2: SearchSpace,
    S3: SearchSpace,
    F: FnMut(Precision, Precision, Precision) -> Precision,
{
    let mut best: Option<Tuned<(Precision, Precision, Precision)>> = None;

    loop {
        for param1 in space1.values() {
            let inner = tune2(
                |param2, param3| op(param1, param2, param3),
                space2.clone(),
                space3.clone(),
            );
            if best.as_ref().map_or(true, |b| inner.optimum < b.optimum) {
                best = Some(Tuned {
                    optimum: inner.optimum,
                    params: (param1, inner.params.0, inner.params.1),
                });
            }
        }

        let current = best.as_ref().expect("search space must not be empty");
        if !space1.refine(current.params.0) {
            break;
        }
    }

    best.expect("search space must not be empty")
}
