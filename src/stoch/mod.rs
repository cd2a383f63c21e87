//! Stochastic (noisy sub-gradient) solvers.
//!
//! The objective is treated as a noisy oracle: every `value_grad` call is
//! one minibatch advance at unit cost. Solvers iterate in epochs; at the
//! end of each epoch the exponentially averaged iterate is evaluated,
//! reported through the user-log callback and tracked as the best state.
//! Before the main run every algorithm tunes its hyper-parameters with
//! 1-epoch trials over its default grids.

use core::fmt;

use crate::average::MomentumAverage;
use crate::error::{Result, SolverError};
use crate::objective::Problem;
use crate::state::SolverState;
use crate::tune::FiniteSpace;
use crate::types::{Precision, Status, Vector};

pub mod adadelta;
pub mod adagrad;
pub mod adam;
pub mod ag;
pub mod lrate;
pub mod ngd;
pub mod sg;
pub mod sga;
pub mod sgm;
pub mod sia;

pub use ag::AgRestart;
pub use lrate::LearningRate;

/// Momentum of the iterate-trajectory average reported per epoch.
const ITERATE_MOMENTUM: Precision = 0.95;

/// The closed set of stochastic algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StochAlgorithm {
    /// Plain stochastic gradient with a decaying learning rate
    Sg,
    /// Stochastic gradient with momentum
    Sgm,
    /// Stochastic average gradient
    Sga,
    /// Stochastic gradient with Polyak-Ruppert iterate averaging
    Sia,
    /// Normalized gradient descent
    Ngd,
    /// Nesterov's accelerated gradient, no restart
    Ag,
    /// Accelerated gradient with function-value restart
    AgFr,
    /// Accelerated gradient with gradient restart
    AgGr,
    /// AdaGrad
    AdaGrad,
    /// AdaDelta
    AdaDelta,
    /// Adam
    Adam,
}

impl fmt::Display for StochAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StochAlgorithm::Sg => write!(f, "sg"),
            StochAlgorithm::Sgm => write!(f, "sgm"),
            StochAlgorithm::Sga => write!(f, "sga"),
            StochAlgorithm::Sia => write!(f, "sia"),
            StochAlgorithm::Ngd => write!(f, "ngd"),
            StochAlgorithm::Ag => write!(f, "ag"),
            StochAlgorithm::AgFr => write!(f, "ag-fr"),
            StochAlgorithm::AgGr => write!(f, "ag-gr"),
            StochAlgorithm::AdaGrad => write!(f, "adagrad"),
            StochAlgorithm::AdaDelta => write!(f, "adadelta"),
            StochAlgorithm::Adam => write!(f, "adam"),
        }
    }
}

/// Configuration for a stochastic run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StochParams {
    /// Algorithm to run
    pub algorithm: StochAlgorithm,
    /// Number of epochs
    pub epochs: usize,
    /// Iterations (oracle calls) per epoch
    pub epoch_size: usize,
}

impl StochParams {
    /// Create a configuration.
    pub fn new(algorithm: StochAlgorithm, epochs: usize, epoch_size: usize) -> Self {
        Self {
            algorithm,
            epochs,
            epoch_size,
        }
    }

    /// The reduced configuration used for hyper-parameter trials:
    /// a single epoch of the same size.
    pub fn tunable(&self) -> Self {
        Self {
            algorithm: self.algorithm,
            epochs: 1,
            epoch_size: self.epoch_size,
        }
    }

    fn validate(&self, problem: &Problem<'_>, x0: &Vector) -> Result<()> {
        if x0.len() != problem.size() {
            return Err(SolverError::dimensions(
                problem.size(),
                x0.len(),
                "minimize_stoch",
            ));
        }
        if self.epochs == 0 {
            return Err(SolverError::parameter("epochs", "must be at least 1"));
        }
        if self.epoch_size == 0 {
            return Err(SolverError::parameter("epoch_size", "must be at least 1"));
        }
        Ok(())
    }
}

/// Per-epoch user-log callback: receives the averaged state and the
/// hyper-parameter tuple in effect; returning `false` stops the run.
pub type EpochLogger<'a> = dyn FnMut(&SolverState, &[(&'static str, Precision)]) -> bool + 'a;

/// The per-algorithm update rule driven by the shared epoch loop.
pub(crate) trait StochUpdate {
    /// One oracle call and one parameter update; `k` is the global
    /// iteration index starting at zero.
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, k: usize);

    /// Hook at the end of each epoch (AG re-anchors its state here).
    fn end_epoch(&mut self, _problem: &Problem<'_>, _state: &mut SolverState) {}
}

/// Default hyper-parameter grids (finite search spaces).
pub(crate) fn make_alpha0s() -> FiniteSpace {
    FiniteSpace::new(vec![1e-4, 1e-3, 1e-2, 1e-1, 1e+0])
}

pub(crate) fn make_decays() -> FiniteSpace {
    FiniteSpace::new(vec![0.10, 0.25, 0.50, 0.75, 1.00])
}

pub(crate) fn make_momenta() -> FiniteSpace {
    FiniteSpace::new(vec![0.10, 0.25, 0.50, 0.90, 0.95])
}

pub(crate) fn make_epsilons() -> FiniteSpace {
    FiniteSpace::new(vec![1e-4, 1e-6, 1e-8])
}

pub(crate) fn make_qs() -> FiniteSpace {
    FiniteSpace::new(vec![0.05, 0.10, 0.15, 0.20])
}

/// Rank a tuning trial by its final averaged value, demoting non-finite
/// outcomes to `+inf`.
pub(crate) fn trial_value(state: &SolverState) -> Precision {
    if state.f.is_finite() {
        state.f
    } else {
        Precision::INFINITY
    }
}

/// Minimize `problem` from `x0` with the given stochastic configuration,
/// auto-tuning the algorithm's hyper-parameters first.
pub fn minimize_stoch(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
) -> Result<SolverState> {
    minimize_stoch_logged(params, problem, x0, |_, _| true)
}

/// Same as [`minimize_stoch`], invoking `logger` once per epoch with the
/// averaged state and the hyper-parameter tuple in effect.
pub fn minimize_stoch_logged(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    mut logger: impl FnMut(&SolverState, &[(&'static str, Precision)]) -> bool,
) -> Result<SolverState> {
    params.validate(problem, x0)?;
    let ulog: &mut EpochLogger<'_> = &mut logger;

    let state = match params.algorithm {
        StochAlgorithm::Sg => sg::sg(params, problem, x0, ulog),
        StochAlgorithm::Sgm => sgm::sgm(params, problem, x0, ulog),
        StochAlgorithm::Sga => sga::sga(params, problem, x0, ulog),
        StochAlgorithm::Sia => sia::sia(params, problem, x0, ulog),
        StochAlgorithm::Ngd => ngd::ngd(params, problem, x0, ulog),
        StochAlgorithm::Ag => ag::ag(params, problem, x0, AgRestart::None, ulog),
        StochAlgorithm::AgFr => ag::ag(params, problem, x0, AgRestart::Function, ulog),
        StochAlgorithm::AgGr => ag::ag(params, problem, x0, AgRestart::Gradient, ulog),
        StochAlgorithm::AdaGrad => adagrad::adagrad(params, problem, x0, ulog),
        StochAlgorithm::AdaDelta => adadelta::adadelta(params, problem, x0, ulog),
        StochAlgorithm::Adam => adam::adam(params, problem, x0, ulog),
    };

    Ok(state)
}

/// The shared two-level stochastic loop.
///
/// Maintains three states: the live iterate, the exponentially averaged
/// iterate evaluated at epoch boundaries, and the best averaged state
/// observed, which is what the caller receives.
pub(crate) fn stoch_loop(
    problem: &Problem<'_>,
    params: &StochParams,
    istate: SolverState,
    rule: &mut dyn StochUpdate,
    config: &[(&'static str, Precision)],
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut cstate = istate.clone();
    let mut astate = istate.clone();
    let mut bstate = istate;

    let mut xavg = MomentumAverage::new(ITERATE_MOMENTUM, cstate.x.len());
    let mut status = Status::MaxIters;
    let mut k = 0;

    for epoch in 0..params.epochs {
        for _ in 0..params.epoch_size {
            rule.iterate(problem, &mut cstate, k);
            xavg.update(&cstate.x);
            k += 1;
        }
        rule.end_epoch(problem, &mut cstate);

        // log the averaged state & check the stopping criteria
        astate.update_point(problem, xavg.value().clone());
        astate.iter = epoch + 1;
        astate.t = cstate.t;

        let keep_going = ulog(&astate, config);
        if astate.is_finite() && problem.is_valid(&astate.x) && astate.improves_on(&bstate) {
            bstate = astate.clone();
        }
        if !keep_going {
            status = Status::UserStop;
            break;
        }
    }

    bstate.status = status;
    bstate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::Sphere;

    #[test]
    fn test_tunable_params_are_one_epoch() {
        let params = StochParams::new(StochAlgorithm::Sg, 50, 100);
        let tunable = params.tunable();
        assert_eq!(tunable.epochs, 1);
        assert_eq!(tunable.epoch_size, 100);
        assert_eq!(tunable.algorithm, StochAlgorithm::Sg);
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let sphere = Sphere::new(5);
        let problem = Problem::new(&sphere);
        let params = StochParams::new(StochAlgorithm::Sg, 2, 10);

        let err = minimize_stoch(&params, &problem, &Vector::zeros(3)).unwrap_err();
        assert!(matches!(err, SolverError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_zero_epochs_is_rejected() {
        let sphere = Sphere::new(2);
        let problem = Problem::new(&sphere);
        let params = StochParams::new(StochAlgorithm::Sg, 0, 10);

        assert!(minimize_stoch(&params, &problem, &Vector::zeros(2)).is_err());
    }

    #[test]
    fn test_logger_receives_config_and_stops() {
        let sphere = Sphere::new(3);
        let problem = Problem::new(&sphere);
        let params = StochParams::new(StochAlgorithm::Sg, 10, 5);

        let mut epochs_seen = 0;
        let state = minimize_stoch_logged(
            &params,
            &problem,
            &Vector::from_element(3, 1.0),
            |st, config| {
                epochs_seen += 1;
                assert!(st.iter >= 1);
                assert!(config.iter().any(|(name, _)| *name == "alpha0"));
                epochs_seen < 3
            },
        )
        .unwrap();

        assert_eq!(state.status, Status::UserStop);
    }

    #[test]
    fn test_trial_value_demotes_non_finite() {
        let mut state = SolverState::new(2);
        state.f = Precision::NAN;
        assert_eq!(trial_value(&state), Precision::INFINITY);
        state.f = 3.0;
        assert_eq!(trial_value(&state), 3.0);
    }
}
