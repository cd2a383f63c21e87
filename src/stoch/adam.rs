//! Adam: adaptive moment estimation
//! ("Adam: A Method for Stochastic Optimization", Kingma & Ba).

use crate::average::MomentumAverage;
use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::{
    make_alpha0s, make_epsilons, stoch_loop, trial_value, EpochLogger, StochParams, StochUpdate,
};
use crate::tune::tune2;
use crate::types::{Precision, Vector};

const BETA1: Precision = 0.900;
const BETA2: Precision = 0.999;

struct AdamUpdate {
    alpha0: Precision,
    epsilon: Precision,
    beta1t: Precision,
    beta2t: Precision,
    m: MomentumAverage,
    v: MomentumAverage,
}

impl StochUpdate for AdamUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, _k: usize) {
        self.m.update(&state.g);
        let g2 = state.g.component_mul(&state.g);
        self.v.update(&g2);

        // bias-corrected moments
        let mc = 1.0 - self.beta1t;
        let vc = 1.0 - self.beta2t;
        let epsilon = self.epsilon;

        state.d = self
            .m
            .value()
            .zip_map(self.v.value(), |m, v| -(m / mc) / ((v / vc).sqrt() + epsilon));
        state.update_step(problem, self.alpha0);

        self.beta1t *= BETA1;
        self.beta2t *= BETA2;
    }
}

/// Minimize with Adam, tuning `(alpha0, epsilon)` first.
pub fn adam(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune2(
        |alpha0, epsilon| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&adam_with(
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
    adam_with(params, problem, x0, alpha0, epsilon, ulog)
}

/// Minimize with Adam and explicit hyper-parameters.
pub fn adam_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    alpha0: Precision,
    epsilon: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut rule = AdamUpdate {
        alpha0,
        epsilon,
        beta1t: BETA1,
        beta2t: BETA2,
        m: MomentumAverage::new(BETA1, x0.len()),
        v: MomentumAverage::new(BETA2, x0.len()),
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
