//! Nonlinear conjugate gradient descent.
//!
//! The direction recurrence is `d_0 = -g_0`, `d_k = -g_k + beta_k d_{k-1}`;
//! the update formula for `beta_k` is the only thing that distinguishes the
//! variants, so it is factored out as the pure function [`cgd_beta`] over
//! `(g_new, g_prev, d_prev)`.

use crate::batch::{BatchAlgorithm, DirectionRule};
use crate::state::SolverState;
use crate::types::{Precision, Vector};

/// Lower-clamp threshold for the Hager-Zhang update.
const HZ_ETA: Precision = 0.01;

/// The conjugate-gradient beta update formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CgdUpdate {
    /// Fletcher-Reeves
    Fr,
    /// Polak-Ribiere+ (non-negative)
    Prp,
    /// Hestenes-Stiefel
    Hs,
    /// Dai-Yuan
    Dy,
    /// Conjugate descent
    Cd,
    /// Liu-Storey
    Ls,
    /// Hager-Zhang N+ (clamped from below)
    N,
    /// Hybrid max(0, min(DY, CD))
    Dycd,
    /// Hybrid max(0, min(DY, HS))
    Dyhs,
}

impl CgdUpdate {
    /// Map a CGD batch algorithm to its update formula.
    ///
    /// # Panics
    /// Panics when called with a non-CGD algorithm.
    pub fn from_algorithm(algorithm: BatchAlgorithm) -> Self {
        match algorithm {
            BatchAlgorithm::Cgd | BatchAlgorithm::CgdPrp => CgdUpdate::Prp,
            BatchAlgorithm::CgdFr => CgdUpdate::Fr,
            BatchAlgorithm::CgdHs => CgdUpdate::Hs,
            BatchAlgorithm::CgdDy => CgdUpdate::Dy,
            BatchAlgorithm::CgdCd => CgdUpdate::Cd,
            BatchAlgorithm::CgdLs => CgdUpdate::Ls,
            BatchAlgorithm::CgdN => CgdUpdate::N,
            BatchAlgorithm::CgdDycd => CgdUpdate::Dycd,
            BatchAlgorithm::CgdDyhs => CgdUpdate::Dyhs,
            other => panic!("{other} is not a conjugate-gradient algorithm"),
        }
    }
}

/// Compute `beta_k` from the new gradient, the previous gradient and the
/// previous direction.
pub fn cgd_beta(update: CgdUpdate, g: &Vector, g_prev: &Vector, d_prev: &Vector) -> Precision {
    match update {
        CgdUpdate::Fr => g.dot(g) / g_prev.dot(g_prev),
        CgdUpdate::Prp => {
            let y = g - g_prev;
            (g.dot(&y) / g_prev.dot(g_prev)).max(0.0)
        }
        CgdUpdate::Hs => {
            let y = g - g_prev;
            g.dot(&y) / d_prev.dot(&y)
        }
        CgdUpdate::Dy => {
            let y = g - g_prev;
            g.dot(g) / d_prev.dot(&y)
        }
        CgdUpdate::Cd => -g.dot(g) / d_prev.dot(g_prev),
        CgdUpdate::Ls => {
            let y = g - g_prev;
            -g.dot(&y) / d_prev.dot(g_prev)
        }
        CgdUpdate::N => {
            let y = g - g_prev;
            let dy = d_prev.dot(&y);
            let beta = (&y - d_prev.scale(2.0 * y.dot(&y) / dy)).dot(g) / dy;

            // lower clamp (the "+" of N+)
            let eta = -1.0 / (d_prev.norm() * HZ_ETA.min(g_prev.norm()));
            beta.max(eta)
        }
        CgdUpdate::Dycd => {
            let dy = cgd_beta(CgdUpdate::Dy, g, g_prev, d_prev);
            let cd = cgd_beta(CgdUpdate::Cd, g, g_prev, d_prev);
            dy.min(cd).max(0.0)
        }
        CgdUpdate::Dyhs => {
            let dy = cgd_beta(CgdUpdate::Dy, g, g_prev, d_prev);
            let hs = cgd_beta(CgdUpdate::Hs, g, g_prev, d_prev);
            dy.min(hs).max(0.0)
        }
    }
}

/// The conjugate-gradient direction rule.
pub(crate) struct ConjugateRule {
    update: CgdUpdate,
}

impl ConjugateRule {
    pub(crate) fn new(update: CgdUpdate) -> Self {
        Self { update }
    }
}

impl DirectionRule for ConjugateRule {
    fn direction(&mut self, current: &SolverState, previous: &SolverState, iter: usize) -> Vector {
        if iter == 0 {
            return -&current.g;
        }

        let beta = cgd_beta(self.update, &current.g, &previous.g, &previous.d);
        -&current.g + previous.d.scale(beta)
    }
}
