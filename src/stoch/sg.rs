//! Plain stochastic gradient descent with a decaying learning rate.

use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::lrate::LearningRate;
use crate::stoch::{
    make_alpha0s, make_decays, stoch_loop, trial_value, EpochLogger, StochParams, StochUpdate,
};
use crate::tune::tune2;
use crate::types::{Precision, Vector};

struct SgUpdate {
    lrate: LearningRate,
}

impl StochUpdate for SgUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, k: usize) {
        let alpha = self.lrate.get(k);

        state.d = -&state.g;
        state.update_step(problem, alpha);
    }
}

/// Minimize with SG, tuning `(alpha0, decay)` on 1-epoch trials first.
pub fn sg(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune2(
        |alpha0, decay| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&sg_with(&params.tunable(), problem, x0, alpha0, decay, &mut quiet))
        },
        make_alpha0s(),
        make_decays(),
    );

    let (alpha0, decay) = tuned.params;
    sg_with(params, problem, x0, alpha0, decay, ulog)
}

/// Minimize with SG and explicit hyper-parameters.
pub fn sg_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    alpha0: Precision,
    decay: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut rule = SgUpdate {
        lrate: LearningRate::new(alpha0, decay),
    };
    let config = [("alpha0", alpha0), ("decay", decay)];

    stoch_loop(
        problem,
        params,
        SolverState::from_problem(problem, x0),
        &mut rule,
        &config,
        ulog,
    )
}
