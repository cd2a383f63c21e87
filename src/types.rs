//! Common types and type aliases used throughout the solver.
//!
//! This module defines the fundamental scalar and vector types for the
//! numerical core together with the solver outcome taxonomy.

use core::fmt;

/// Floating-point precision type.
///
/// Currently fixed to f64 for numerical stability, but may be
/// parameterized in future versions for memory optimization.
pub type Precision = f64;

/// Dense real-valued vector used for iterates, gradients and directions.
pub type Vector = nalgebra::DVector<Precision>;

/// Outcome of a solver invocation.
///
/// Numerical trouble travels through this status; only precondition
/// violations at the API boundary are reported as [`crate::SolverError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The solver is still iterating (the initial status).
    Running,
    /// The gradient test `||g||_inf / max(1, |f|) < epsilon` was satisfied.
    Converged,
    /// The iteration/epoch budget was exhausted before convergence.
    MaxIters,
    /// A numerical failure occurred (line search stalled, non-finite
    /// gradient); the best-seen iterate is preserved in the returned state.
    Failed,
    /// The user-log callback requested early termination.
    UserStop,
}

impl Status {
    /// Check whether the status marks a finished run (anything but `Running`).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Running)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Running => write!(f, "running"),
            Status::Converged => write!(f, "converged"),
            Status::MaxIters => write!(f, "max_iters"),
            Status::Failed => write!(f, "failed"),
            Status::UserStop => write!(f, "user_stop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Converged.to_string(), "converged");
        assert_eq!(Status::MaxIters.to_string(), "max_iters");
        assert_eq!(Status::UserStop.to_string(), "user_stop");
    }

    #[test]
    fn test_status_terminal() {
        assert!(!Status::Running.is_terminal());
        assert!(Status::Converged.is_terminal());
        assert!(Status::Failed.is_terminal());
    }
}
