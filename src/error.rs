//! Error types and handling for the solver library.
//!
//! Only precondition violations are surfaced through [`SolverError`]:
//! dimension mismatches and invalid configuration fail eagerly at the API
//! boundary. Numerical failures during a run (a stalled line search, a
//! non-finite gradient) are recorded in [`crate::Status`] on the returned
//! state instead, with the best-seen iterate preserved.

/// Result type alias for solver operations.
pub type Result<T> = core::result::Result<T, SolverError>;

/// Error type for precondition violations at the API boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Dimension mismatch between the objective and a supplied vector.
    #[error("dimension mismatch in {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension found
        actual: usize,
        /// Context where the mismatch occurred
        operation: String,
    },

    /// Invalid configuration parameter.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Why the value was rejected
        message: String,
    },
}

impl SolverError {
    /// Build a dimension-mismatch error for the given operation.
    pub fn dimensions(expected: usize, actual: usize, operation: &str) -> Self {
        SolverError::DimensionMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        }
    }

    /// Build an invalid-parameter error.
    pub fn parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        SolverError::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}
