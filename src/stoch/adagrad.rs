//! AdaGrad: per-dimension learning rates from accumulated squared
//! gradients (Duchi, Hazan & Singer).

use crate::average::RunningAverage;
use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::{
    make_alpha0s, make_epsilons, stoch_loop, trial_value, EpochLogger, StochParams, StochUpdate,
};
use crate::tune::tune2;
use crate::types::{Precision, Vector};

struct AdaGradUpdate {
    alpha0: Precision,
    epsilon: Precision,
    gavg: RunningAverage,
}

impl StochUpdate for AdaGradUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, _k: usize) {
        let g2 = state.g.component_mul(&state.g);
        self.gavg.update(&g2);

        let epsilon = self.epsilon;
        state.d = state
            .g
            .zip_map(self.gavg.value(), |g, avg| -g / (avg + epsilon).sqrt());
        state.update_step(problem, self.alpha0);
    }
}

/// Minimize with AdaGrad, tuning `(alpha0, epsilon)` first.
pub fn adagrad(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune2(
        |alpha0, epsilon| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&adagrad_with(
                &params.tunable(),
                problem,
                x0,
                alpha0,
                epsilon,
                &mut quiet,
            ))
        },
        make_alpha0s(),
        make_epsilons(),
    );

    let (alpha0, epsilon) = tuned.params;
    adagrad_with(params, problem, x0, alpha0, epsilon, ulog)
}

/// Minimize with AdaGrad and explicit hyper-parameters.
pub fn adagrad_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    alpha0: Precision,
    epsilon: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut rule = AdaGradUpdate {
        alpha0,
        epsilon,
        gavg: RunningAverage::new(x0.len()),
    };
    let config = [("alpha0", alpha0), ("epsilon", epsilon)];

    stoch_loop(
        problem,
        params,
        SolverState::from_problem(problem, x0),
        &mut rule,
        &config,
        ulog,
    )
}
