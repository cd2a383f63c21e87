//! Nesterov's accelerated gradient with adaptive restart.
//!
//! Follows "Adaptive Restart for Accelerated Gradient Schemes" by
//! O'Donoghue & Candes (2013): the momentum parameter `theta` follows the
//! recurrence `theta_cur^2 = (1 - theta_cur) theta_prev^2 + q theta_cur`
//! and restarting resets it to 1 when the chosen monotonicity test fails.

use crate::objective::Problem;
use crate::state::SolverState;
use crate::stoch::{
    make_alpha0s, make_qs, stoch_loop, trial_value, EpochLogger, StochParams, StochUpdate,
};
use crate::tune::tune2;
use crate::types::{Precision, Vector};

/// Restart policies for the accelerated gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgRestart {
    /// Never restart
    None,
    /// Restart when the function value increases
    Function,
    /// Restart when `g . (x - x_prev) > 0`
    Gradient,
}

struct AgUpdate {
    alpha0: Precision,
    q: Precision,
    restart: AgRestart,
    px: Vector,
    py: Vector,
    pfx: Precision,
    ptheta: Precision,
}

impl AgUpdate {
    fn new(istate: &SolverState, alpha0: Precision, q: Precision, restart: AgRestart) -> Self {
        Self {
            alpha0,
            q,
            restart,
            px: istate.x.clone(),
            py: istate.x.clone(),
            pfx: istate.f,
            ptheta: 1.0,
        }
    }
}

/// Positive root of `theta^2 + (ptheta^2 - q) theta - ptheta^2 = 0`.
fn next_theta(ptheta: Precision, q: Precision) -> Precision {
    let b = ptheta * ptheta - q;
    let c = -ptheta * ptheta;
    (-b + (b * b - 4.0 * c).sqrt()) / 2.0
}

impl StochUpdate for AgUpdate {
    fn iterate(&mut self, problem: &Problem<'_>, state: &mut SolverState, _k: usize) {
        let ctheta = next_theta(self.ptheta, self.q);
        let beta = self.ptheta * (1.0 - self.ptheta) / (self.ptheta * self.ptheta + ctheta);

        // gradient step from the look-ahead point
        state.update_point(problem, self.py.clone());
        let cx = &self.py - state.g.scale(self.alpha0);
        let cy = &cx + (&cx - &self.px).scale(beta);

        let restarted = match self.restart {
            AgRestart::None => false,
            AgRestart::Function => {
                let cfx = problem.value(&cx);
                let up = cfx > self.pfx;
                self.pfx = cfx;
                up
            }
            AgRestart::Gradient => {
                let dx = &cx - &self.px;
                state.g.dot(&dx) > 0.0
            }
        };

        if restarted {
            // wipe the momentum: restart the scheme from cx
            self.ptheta = 1.0;
            self.py = cx.clone();
        } else {
            self.ptheta = ctheta;
            self.py = cy;
        }
        self.px = cx;
    }

    fn end_epoch(&mut self, problem: &Problem<'_>, state: &mut SolverState) {
        // re-anchor the live state at the actual iterate
        state.update_point(problem, self.px.clone());
    }
}

/// Minimize with AG under the given restart policy, tuning `(alpha0, q)`
/// on 1-epoch trials first.
pub fn ag(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    restart: AgRestart,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let tuned = tune2(
        |alpha0, q| {
            let mut quiet = |_: &SolverState, _: &[(&'static str, Precision)]| true;
            trial_value(&ag_with(
                &params.tunable(),
                problem,
                x0,
                restart,
                alpha0,
                q,
                &mut quiet,
            ))
        },
        make_alpha0s(),
        make_qs(),
    );

    let (alpha0, q) = tuned.params;
    ag_with(params, problem, x0, restart, alpha0, q, ulog)
}

/// Minimize with AG and explicit hyper-parameters.
pub fn ag_with(
    params: &StochParams,
    problem: &Problem<'_>,
    x0: &Vector,
    restart: AgRestart,
    alpha0: Precision,
    q: Precision,
    ulog: &mut EpochLogger<'_>,
) -> SolverState {
    let istate = SolverState::from_problem(problem, x0);
    let mut rule = AgUpdate::new(&istate, alpha0, q, restart);
    let config = [("alpha0", alpha0), ("q", q)];

    stoch_loop(problem, params, istate, &mut rule, &config, ulog)
}
