//! Stochastic average gradient descent.
//!
//! Steps along the arithmetic running average of all sampled gradients
//! ("Minimizing Finite Sums with the Stochastic Average Gradient",
//! Schmidt, Le Roux & Bach).

use crate::average::RunningAverage;
use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::lrate::LearningRate;
use crate::stoch::{
    make_alpha0s, make_decays, stoch_loop, trial_value, EpochLogger, StochParams, StochUpdate,
};
use crate::tune::tune2;
use crate::types::{Precision, Vector};

struct SgaUpdate {
    lrate: LearningRate,
    gavg: RunningAverage,
}

impl StochUpdate for SgaUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, k: usize) {
        let alpha = self.lrate.get(k);

        self.gavg.update(&state.g);
        state.d = -self.gavg.value();
        state.update_step(problem, alpha);
    }
}

/// Minimize with SGA, tuning `(alpha0, decay)` on 1-epoch trials first.
pub fn sga(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune2(
        |alpha0, decay| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&sga_with(&params.tunable(), problem, x0, alpha0, decay, &mut quiet))
        },
        make_alpha0s(),
        make_decays(),
    );

    let (alpha0, decay) = tuned.params;
    sga_with(params, problem, x0, alpha0, decay, ulog)
}

/// Minimize with SGA and explicit hyper-parameters.
pub fn sga_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    alpha0: Precision,
    decay: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut rule = SgaUpdate {
        lrate: LearningRate::new(alpha0, decay),
        gavg: RunningAverage::new(x0.len()),
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
    fn test_sga_direction_is_averaged_gradient() {
        let sphere = Sphere::new(2);
        let problem = Problem::new(&sphere);
        let x0 = Vector::from_element(2, 2.0);

        let mut state = SolverState::from_problem(&problem, &x0);
        let mut rule = SgaUpdate {
            lrate: LearningRate::new(0.25, 0.0),
            gavg: RunningAverage::new(2),
        };

        // first step: the average equals the first gradient (4, 4)
        rule.iterate(&problem, &mut state, 0);
        assert_eq!(state.d, Vector::from_element(2, -4.0));
    }

    #[test]
    fn test_sga_reduces_sphere() {
        let sphere = Sphere::new(4);
        let problem = Problem::new(&sphere);
        let x0 = Vector::from_element(4, 2.0);
        let f0 = problem.value(&x0);

        let params = StochParams::new(crate::stoch::StochAlgorithm::Sga, 5, 50);
        let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
        let state = sga_with(&params, &problem, &x0, 0.1, 0.5, &mut quiet);

        assert!(state.f < f0);
    }
}
