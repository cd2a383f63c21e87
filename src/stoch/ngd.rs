//! Stochastic normalized gradient descent.
//!
//! Steps along `-g / ||g||_2` with a constant learning rate, which makes
//! progress depend only on the gradient direction.

use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::{make_alpha0s, stoch_loop, trial_value, EpochLogger, StochParams, StochUpdate};
use crate::tune::tune;
use crate::types::{Precision, Vector};

struct NgdUpdate {
    alpha0: Precision,
}

impl StochUpdate for NgdUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, _k: usize) {
        let norm = state.g.norm();
        state.d = if norm > 0.0 {
            state.g.scale(-1.0 / norm)
        } else {
            -&state.g
        };
        state.update_step(problem, self.alpha0);
    }
}

/// Minimize with NGD, tuning `alpha0` first.
pub fn ngd(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune(
        |alpha0| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&ngd_with(&params.tunable(), problem, x0, alpha0, &mut quiet))
        },
        make_alpha0s(),
    );

    ngd_with(params, problem, x0, tuned.params, ulog)
}

/// Minimize with NGD and an explicit learning rate.
pub fn ngd_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    alpha0: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut rule = NgdUpdate { alpha0 };
    let config = [("alpha0", alpha0)];

    stoch_loop(
        problem,
        params,
        SolverState::from_problem(problem, x0),
        &mut rule,
        &config,
        ulog,
    )
}
