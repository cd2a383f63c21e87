//! AdaDelta: learning-rate-free adaptive steps
//! ("ADADELTA: An Adaptive Learning Rate Method", Zeiler).

use crate::average::MomentumAverage;
use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::{
    make_epsilons, make_momenta, stoch_loop, trial_value, EpochLogger, StochParams, StochUpdate,
};
use crate::tune::tune2;
use crate::types::{Precision, Vector};

struct AdaDeltaUpdate {
    epsilon: Precision,
    gavg: MomentumAverage,
    davg: MomentumAverage,
}

impl StochUpdate for AdaDeltaUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, _k: usize) {
        let g2 = state.g.component_mul(&state.g);
        self.gavg.update(&g2);

        let epsilon = self.epsilon;
        let mut d = Vector::zeros(state.g.len());
        for i in 0..d.len() {
            d[i] = -state.g[i] * (self.davg.value()[i] + epsilon).sqrt()
                / (self.gavg.value()[i] + epsilon).sqrt();
        }
        state.d = d;

        let d2 = state.d.component_mul(&state.d);
        self.davg.update(&d2);

        state.update_step(problem, 1.0);
    }
}

/// Minimize with AdaDelta, tuning `(momentum, epsilon)` first.
pub fn adadelta(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune2(
        |momentum, epsilon| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&adadelta_with(
                &params.tunable(),
                problem,
                x0,
                momentum,
                epsilon,
                &mut quiet,
            ))
        },
        make_momenta(),
        make_epsilons(),
    );

    let (momentum, epsilon) = tuned.params;
    adadelta_with(params, problem, x0, momentum, epsilon, ulog)
}

/// Minimize with AdaDelta and explicit hyper-parameters.
pub fn adadelta_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    momentum: Precision,
    epsilon: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let mut rule = AdaDeltaUpdate {
        epsilon,
        gavg: MomentumAverage::new(momentum, x0.len()),
        davg: MomentumAverage::new(momentum, x0.len()),
    };
    let config = [("momentum", momentum), ("epsilon", epsilon)];

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
    fn test_adadelta_reduces_sphere() {
        let sphere = Sphere::new(4);
        let problem = Problem::new(&sphere);
        let x0 = Vector::from_element(4, 2.0);
        let f0 = problem.value(&x0);

        let params = StochParams::new(crate::stoch::StochAlgorithm::AdaDelta, 10, 100);
        let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
        let state = adadelta_with(&params, &problem, &x0, 0.9, 1e-6, &mut quiet);

        assert!(state.f < f0);
    }
}
