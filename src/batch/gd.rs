//! Gradient descent: the steepest-descent direction rule.

use crate::batch::DirectionRule;
use crate::state::SolverState;
use crate::types::Vector;

/// `d = -g`.
pub(crate) struct SteepestDescent;

impl DirectionRule for SteepestDescent {
    fn direction(&mut self, current: &SolverState, _previous: &SolverState, _iter: usize) -> Vector {
        -&current.g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_negative_gradient() {
        let mut state = SolverState::new(3);
        state.g = Vector::from_vec(vec![1.0, -2.0, 3.0]);

        let mut rule = SteepestDescent;
        let d = rule.direction(&state, &state.clone(), 0);
        assert_eq!(d, Vector::from_vec(vec![-1.0, 2.0, -3.0]));
    }
}
