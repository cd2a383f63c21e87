//! Stochastic iterate-averaging gradient descent.
//!
//! Runs plain SG on a shadow iterate and evaluates the arithmetic average
//! of the whole trajectory (Polyak-Ruppert averaging) as the reported
//! state at the end of every epoch.

use crate::average::RunningAverage;
use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::lrate::LearningRate;
use crate::stoch::{
    make_alpha0s, make_decays, stoch_loop, trial_value, EpochLogger, StochParams, StochUpdate,
};
use crate::tune::tune2;
use crate::types::{Precision, Vector};

struct SiaUpdate {
    lrate: LearningRate,
    cx: Vector,
    xavg: RunningAverage,
}

impl StochUpdate for SiaUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, k: usize) {
        let alpha = self.lrate.get(k);

        // shadow SG step, then evaluate at the raw iterate
        self.cx.axpy(-alpha, &state.g, 1.0);
        state.update_point(problem, self.cx.clone());

        self.xavg.update(&self.cx);
    }

    fn end_epoch(&mut self, problem: &Problem<'_>, state: &mut SolverState) {
        state.update_point(problem, self.xavg.value().clone());
    }
}

/// Minimize with SIA, tuning `(alpha0, decay)` on 1-epoch trials first.
pub fn sia(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune2(
        |alpha0, decay| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&sia_with(&params.tunable(), problem, x0, alpha0, decay, &mut quiet))
        },
        make_alpha0s(),
        make_decays(),
    );

    let (alpha0, decay) = tuned.params;
    sia_with(params, problem, x0, alpha0, decay, ulog)
}

/// Minimize with SIA and explicit hyper-parameters.
pub fn sia_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    alpha0: Precision,
    decay: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut rule = SiaUpdate {
        lrate: LearningRate::new(alpha0, decay),
        cx: x0.clone(),
        xavg: RunningAverage::new(x0.len()),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::Sphere;

    #[test]
    fn test_sia_reduces_sphere() {
        let sphere = Sphere::new(4);
        let problem = Problem::new(&sphere);
        let x0 = Vector::from_element(4, 2.0);
        let f0 = problem.value(&x0);

        let params = StochParams::new(crate::stoch::StochAlgorithm::Sia, 5, 50);
        let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
        let state = sia_with(&params, &problem, &x0, 0.1, 0.5, &mut quiet);

        assert!(state.f < f0);
    }
}
