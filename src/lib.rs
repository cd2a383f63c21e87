//! # First-Order Solvers for Smooth Unconstrained Minimization
//!
//! This crate implements a family of first-order solvers for unconstrained
//! differentiable minimization, together with the line-search machinery
//! they share, a hyper-parameter tuner and a catalog of analytic benchmark
//! functions.
//!
//! ## Key Features
//!
//! - **Batch solvers**: gradient descent, nine nonlinear conjugate-gradient
//!   updates and L-BFGS with bounded history
//! - **Line searches**: Armijo backtracking, backtracking strong Wolfe and
//!   interpolation-based bracket/zoom
//! - **Stochastic solvers**: SG, momentum, normalized gradient, Nesterov's
//!   accelerated gradient with adaptive restart, AdaGrad, AdaDelta, Adam
//! - **Auto-tuning**: stochastic hyper-parameters are tuned with 1-epoch
//!   trials over finite/log-grid search spaces before the main run
//! - **Benchmark catalog**: 25+ analytic test functions with gradients,
//!   domains, convexity flags and known minima
//!
//! ## Quick Start
//!
//! ```rust
//! use descent_solver::functions::Sphere;
//! use descent_solver::{minimize_batch, BatchParams, Problem, Status, Vector};
//!
//! // minimize the 10-dimensional sphere from the all-ones vector
//! let sphere = Sphere::new(10);
//! let problem = Problem::new(&sphere);
//! let x0 = Vector::from_element(10, 1.0);
//!
//! // default parameters select L-BFGS
//! let state = minimize_batch(&BatchParams::default(), &problem, &x0)?;
//!
//! assert_eq!(state.status, Status::Converged);
//! assert!(state.f < 1e-12);
//! # Ok::<(), descent_solver::SolverError>(())
//! ```
//!
//! ## Solver Families
//!
//! ### Batch
//! Deterministic full-gradient iteration: direction, line search, update,
//! convergence test on `||g||_inf / max(1, |f|)`. See [`minimize_batch`].
//!
//! ### Stochastic
//! Two-level epoch iteration over a noisy oracle, reporting an
//! exponentially averaged iterate per epoch and returning the best
//! averaged state. See [`minimize_stoch`].
//!
//! ### Tuning
//! [`tune`], [`tune2`] and [`tune3`] sweep Cartesian products of finite
//! and grid-refinable spaces; stochastic solvers call them internally.

#![warn(missing_docs, clippy::all)]
#![allow(clippy::float_cmp)] // Numerical code often requires exact comparisons

// Re-export commonly used types
pub use average::{MomentumAverage, RunningAverage};
pub use batch::{
    minimize_batch, minimize_batch_logged, BatchAlgorithm, BatchParams, CgdUpdate, History,
};
pub use error::{Result, SolverError};
pub use linesearch::{LineSearch, LsInitializer, LsStrategy, Step, StepInit};
pub use objective::{central_difference, Objective, Problem};
pub use state::SolverState;
pub use stats::Statistics;
pub use stoch::{
    minimize_stoch, minimize_stoch_logged, AgRestart, LearningRate, StochAlgorithm, StochParams,
};
pub use tune::{tune, tune2, tune3, FiniteSpace, GridSpace, Mapping, SearchSpace, Tuned};
pub use types::{Precision, Status, Vector};

// Core modules
pub mod average;
pub mod batch;
pub mod error;
pub mod functions;
pub mod linesearch;
pub mod objective;
pub mod state;
pub mod stats;
pub mod stoch;
pub mod tune;
pub mod types;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library description.
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize the library with default logging configuration.
///
/// This function should be called once at the start of your application
/// to surface the solver warnings (line-search failures, direction
/// restarts) through `env_logger`.
#[cfg(feature = "std")]
pub fn init() {
    #[cfg(feature = "env_logger")]
    env_logger::try_init().ok();
}
