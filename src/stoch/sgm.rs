//! Stochastic gradient descent with (heavy-ball) momentum.

use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::lrate::LearningRate;
use crate::stoch::{
    make_alpha0s, make_decays, make_momenta, stoch_loop, trial_value, EpochLogger, StochParams,
    StochUpdate,
};
use crate::tune::tune3;
use crate::types::{Precision, Vector};

struct SgmUpdate {
    lrate: LearningRate,
    momentum: Precision,
    velocity: Vector,
}

impl StochUpdate for SgmUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, k: usize) {
        let alpha = self.lrate.get(k);

        // v <- momentum * v - alpha * g; x <- x + v
        self.velocity.axpy(-alpha, &state.g, self.momentum);
        state.d = self.velocity.clone();
        state.update_step(problem, 1.0);
    }
}

/// Minimize with SGM, tuning `(alpha0, decay, momentum)` first.
pub fn sgm(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune3(
        |alpha0, decay, momentum| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&sgm_with(
                &params.tunable(),
                problem,
                x0,
                alpha0,
                decay,
                momentum,
                &mut quiet,
            ))
        },
        make_alpha0s(),
        make_decays(),
        make_momenta(),
    );

    let (alpha0, decay, momentum) = tuned.params;
    sgm_with(params, problem, x0, alpha0, decay, momentum, ulog)
}

/// Minimize with SGM and explicit hyper-parameters.
pub fn sgm_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    alpha0: Precision,
    decay: Precision,
    momentum: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut rule = SgmUpdate {
        lrate: LearningRate::new(alpha0, decay),
        momentum,
        velocity: Vector::zeros(x0.len()),
    };
    let config = [("alpha0", alpha0), ("decay", decay), ("momentum", momentum)];

    stoch_loop(
        problem,
        params,
        SolverState::from_problem(problem, x0),
        &mut rule,
        &config,
        ulog,
    )
}
