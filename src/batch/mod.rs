//! Batch (deterministic, full-gradient) solvers.
//!
//! All batch solvers share the same skeleton (test convergence, compute a
//! descent direction, line-search a step, update) and differ only in the
//! direction rule: steepest descent, one of the nonlinear conjugate
//! gradient updates, or the L-BFGS two-loop recursion.

use core::fmt;

use log::{debug, warn};

use crate::error::{Result, SolverError};
use crate::linesearch::{LineSearch, LsInitializer, LsStrategy, StepInit};
use crate::objective::Problem;
use crate::state::SolverState;
use crate::stats::Statistics;
use crate::types::{Precision, Status, Vector};

pub mod cgd;
pub mod gd;
pub mod lbfgs;

pub use cgd::{cgd_beta, CgdUpdate};
pub use lbfgs::History;

/// The closed set of batch algorithms.
///
/// The generic `Cgd` selects the Polak-Ribiere+ update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatchAlgorithm {
    /// Gradient descent
    Gd,
    /// Nonlinear conjugate gradient (defaults to Polak-Ribiere+)
    Cgd,
    /// CGD with the Fletcher-Reeves update
    CgdFr,
    /// CGD with the Polak-Ribiere+ update
    CgdPrp,
    /// CGD with the Hestenes-Stiefel update
    CgdHs,
    /// CGD with the Dai-Yuan update
    CgdDy,
    /// CGD with the conjugate-descent update
    CgdCd,
    /// CGD with the Liu-Storey update
    CgdLs,
    /// CGD with the Hager-Zhang N+ update
    CgdN,
    /// CGD with the hybrid Dai-Yuan / conjugate-descent update
    CgdDycd,
    /// CGD with the hybrid Dai-Yuan / Hestenes-Stiefel update
    CgdDyhs,
    /// Limited-memory BFGS
    Lbfgs,
}

impl fmt::Display for BatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchAlgorithm::Gd => write!(f, "gd"),
            BatchAlgorithm::Cgd => write!(f, "cgd"),
            BatchAlgorithm::CgdFr => write!(f, "cgd-fr"),
            BatchAlgorithm::CgdPrp => write!(f, "cgd-prp"),
            BatchAlgorithm::CgdHs => write!(f, "cgd-hs"),
            BatchAlgorithm::CgdDy => write!(f, "cgd-dy"),
            BatchAlgorithm::CgdCd => write!(f, "cgd-cd"),
            BatchAlgorithm::CgdLs => write!(f, "cgd-ls"),
            BatchAlgorithm::CgdN => write!(f, "cgd-n"),
            BatchAlgorithm::CgdDycd => write!(f, "cgd-dycd"),
            BatchAlgorithm::CgdDyhs => write!(f, "cgd-dyhs"),
            BatchAlgorithm::Lbfgs => write!(f, "lbfgs"),
        }
    }
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchParams {
    /// Algorithm to run
    pub algorithm: BatchAlgorithm,
    /// Maximum number of iterations
    pub max_iters: usize,
    /// Convergence precision on `||g||_inf / max(1, |f|)`
    pub epsilon: Precision,
    /// L-BFGS history size (ignored by the other algorithms)
    pub history_size: usize,
    /// Initial-step policy; `None` selects the per-algorithm default
    pub ls_init: Option<LsInitializer>,
    /// Line-search strategy; `None` selects the per-algorithm default
    pub ls_strategy: Option<LsStrategy>,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self::new(BatchAlgorithm::Lbfgs)
    }
}

impl BatchParams {
    /// Defaults for the given algorithm: 1000 iterations, epsilon 1e-6,
    /// history size 6, per-algorithm line-search pairing.
    pub fn new(algorithm: BatchAlgorithm) -> Self {
        Self {
            algorithm,
            max_iters: 1000,
            epsilon: 1e-6,
            history_size: 6,
            ls_init: None,
            ls_strategy: None,
        }
    }

    /// Defaults tightened for high precision: epsilon 1e-10 and a
    /// 10x iteration budget.
    pub fn high_precision(algorithm: BatchAlgorithm) -> Self {
        Self::new(algorithm)
            .with_epsilon(1e-10)
            .with_max_iters(10_000)
    }

    /// Defaults loosened for fast, rough solves: epsilon 1e-3 and a
    /// 100-iteration budget.
    pub fn fast(algorithm: BatchAlgorithm) -> Self {
        Self::new(algorithm).with_epsilon(1e-3).with_max_iters(100)
    }

    /// Override the iteration budget.
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Override the convergence precision.
    pub fn with_epsilon(mut self, epsilon: Precision) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Override the L-BFGS history size.
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }

    /// Override the line-search pairing.
    pub fn with_line_search(mut self, init: LsInitializer, strategy: LsStrategy) -> Self {
        self.ls_init = Some(init);
        self.ls_strategy = Some(strategy);
        self
    }

    /// The effective line-search pairing: explicit overrides when set,
    /// otherwise the per-algorithm defaults.
    pub fn line_search(&self) -> (LsInitializer, LsStrategy) {
        let (init, strategy) = match self.algorithm {
            BatchAlgorithm::Gd => (LsInitializer::Quadratic, LsStrategy::BacktrackWolfe),
            BatchAlgorithm::Cgd
            | BatchAlgorithm::CgdPrp
            | BatchAlgorithm::CgdLs
            | BatchAlgorithm::CgdN
            | BatchAlgorithm::CgdDyhs => (LsInitializer::Quadratic, LsStrategy::Interpolation),
            BatchAlgorithm::CgdCd | BatchAlgorithm::CgdDycd => {
                (LsInitializer::Unit, LsStrategy::Interpolation)
            }
            BatchAlgorithm::CgdFr => (LsInitializer::Quadratic, LsStrategy::BacktrackArmijo),
            BatchAlgorithm::CgdDy | BatchAlgorithm::CgdHs => {
                (LsInitializer::Quadratic, LsStrategy::BacktrackWolfe)
            }
            BatchAlgorithm::Lbfgs => (LsInitializer::Unit, LsStrategy::Interpolation),
        };

        (
            self.ls_init.unwrap_or(init),
            self.ls_strategy.unwrap_or(strategy),
        )
    }

    /// The curvature coefficient: loose for the quasi-Newton direction,
    /// tight for the conjugate-gradient family.
    fn c2(&self) -> Precision {
        match self.algorithm {
            BatchAlgorithm::Lbfgs => 0.9,
            _ => 0.1,
        }
    }

    fn validate(&self, problem: &Problem<'_>, x0: &Vector) -> Result<()> {
        if x0.len() != problem.size() {
            return Err(SolverError::dimensions(
                problem.size(),
                x0.len(),
                "minimize_batch",
            ));
        }
        if !(self.epsilon > 0.0) {
            return Err(SolverError::parameter("epsilon", "must be positive"));
        }
        if self.algorithm == BatchAlgorithm::Lbfgs && self.history_size == 0 {
            return Err(SolverError::parameter("history_size", "must be at least 1"));
        }
        Ok(())
    }
}

/// The per-algorithm direction rule fed to the shared skeleton.
pub(crate) trait DirectionRule {
    /// Compute the next search direction.
    fn direction(&mut self, current: &SolverState, previous: &SolverState, iter: usize) -> Vector;

    /// Observe an accepted update (L-BFGS records its `(s, y)` pair here).
    fn record(&mut self, _new: &SolverState, _old: &SolverState) {}
}

/// Minimize `problem` from `x0` with the given batch configuration.
pub fn minimize_batch(
    params: &BatchParams,
    problem: &Problem<'_>,
    x0: &Vector,
) -> Result<SolverState> {
    minimize_batch_logged(params, problem, x0, |_| true)
}

/// Same as [`minimize_batch`], invoking `logger` once per iteration.
/// A `false` return requests early termination (`Status::UserStop`).
pub fn minimize_batch_logged(
    params: &BatchParams,
    problem: &Problem<'_>,
    x0: &Vector,
    mut logger: impl FnMut(&SolverState) -> bool,
) -> Result<SolverState> {
    params.validate(problem, x0)?;

    match params.algorithm {
        BatchAlgorithm::Gd => {
            batch_loop(params, problem, x0, &mut logger, &mut gd::SteepestDescent)
        }
        BatchAlgorithm::Lbfgs => {
            let mut rule = lbfgs::LbfgsRule::new(params.history_size);
            batch_loop(params, problem, x0, &mut logger, &mut rule)
        }
        algorithm => {
            let mut rule = cgd::ConjugateRule::new(CgdUpdate::from_algorithm(algorithm));
            batch_loop(params, problem, x0, &mut logger, &mut rule)
        }
    }
}

/// The shared batch skeleton.
fn batch_loop(
    params: &BatchParams,
    problem: &Problem<'_>,
    x0: &Vector,
    logger: &mut dyn FnMut(&SolverState) -> bool,
    rule: &mut dyn DirectionRule,
) -> Result<SolverState> {
    let (ls_init, ls_strategy) = params.line_search();
    let mut step_init = StepInit::new(ls_init);
    let line_search = LineSearch::new(ls_strategy, 1e-4, params.c2());

    let mut cstate = SolverState::from_problem(problem, x0);
    let mut pstate = cstate.clone();
    let mut best = cstate.clone();
    let mut speed = Statistics::new();

    for iter in 0..params.max_iters {
        cstate.iter = iter;

        if !logger(&cstate) {
            return Ok(finish(best, &cstate, Status::UserStop));
        }

        if cstate.converged(params.epsilon) {
            cstate.status = Status::Converged;
            debug!(
                "{}: converged after {} iterations, avg decrease {:.2e}",
                params.algorithm,
                iter,
                speed.avg()
            );
            return Ok(cstate);
        }

        cstate.d = rule.direction(&cstate, &pstate, iter);
        if !cstate.has_descent() {
            warn!(
                "{}: not a descent direction at iteration {}, restarting",
                params.algorithm, iter
            );
            cstate.d = -&cstate.g;
        }

        let t0 = step_init.t0(&cstate);
        let step = match line_search.search(problem, &cstate, t0) {
            Some(step) => step,
            None => {
                warn!("{}: line search failed at iteration {}", params.algorithm, iter);
                return Ok(finish(best, &cstate, Status::Failed));
            }
        };

        pstate = cstate.clone();
        cstate.update_to(step.t, step.f, step.g);
        rule.record(&cstate, &pstate);
        speed.add((pstate.f - cstate.f).abs() / pstate.f.abs().max(1.0));

        if !cstate.is_finite() {
            warn!("{}: non-finite state at iteration {}", params.algorithm, iter);
            return Ok(finish(best, &cstate, Status::Failed));
        }

        if cstate.improves_on(&best) {
            best = cstate.clone();
        }
    }

    Ok(finish(best, &cstate, Status::MaxIters))
}

/// Terminate with the best-seen iterate, stamping the outcome and the
/// final iteration count.
fn finish(mut best: SolverState, last: &SolverState, status: Status) -> SolverState {
    best.iter = last.iter;
    best.status = status;
    best
}
