//! Objective-function abstraction and the counting problem adapter.
//!
//! Solvers never see concrete functions; they talk to a [`Problem`], which
//! wraps any [`Objective`] with monotone evaluation counters, a central
//! finite-difference gradient for validation and a couple of analysis
//! helpers used by the test suite.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::types::{Precision, Vector};

/// Step for the central finite-difference gradient estimator.
const FD_STEP: Precision = 1e-6;

/// A value-and-gradient oracle over `R^n` with optional metadata.
///
/// Implementations must keep `value` and `value_grad` consistent: the value
/// returned by `value_grad(x)` equals `value(x)`. Oracles without an
/// analytic gradient can rely on the central-difference default.
pub trait Objective: Send + Sync {
    /// Problem dimensionality (n >= 1), constant over the instance lifetime.
    fn size(&self) -> usize;

    /// Evaluate `f(x)`.
    fn value(&self, x: &Vector) -> Precision;

    /// Evaluate `f(x)` and write the gradient into `g`.
    ///
    /// The default falls back to central differences over `value`.
    fn value_grad(&self, x: &Vector, g: &mut Vector) -> Precision {
        *g = central_difference(self, x);
        self.value(x)
    }

    /// Whether `x` lies in the function's declared domain.
    fn is_valid(&self, _x: &Vector) -> bool {
        true
    }

    /// Whether the function is convex on its domain.
    fn is_convex(&self) -> bool {
        false
    }

    /// Smallest supported dimensionality.
    fn min_dims(&self) -> usize {
        1
    }

    /// Largest supported dimensionality.
    fn max_dims(&self) -> usize {
        100_000
    }

    /// Human-readable function name.
    fn name(&self) -> String {
        "unnamed".to_string()
    }

    /// Whether `x` is within `epsilon` of a known minimum.
    ///
    /// Defaults to true for functions whose minima are not catalogued, so
    /// that minimum checks can never produce false rejections.
    fn is_minimum(&self, _x: &Vector, _epsilon: Precision) -> bool {
        true
    }
}

/// Central-difference gradient with fixed step `h = 1e-6`:
/// `g_i ~ (f(x + h e_i) - f(x - h e_i)) / 2h`.
pub fn central_difference<O: Objective + ?Sized>(objective: &O, x: &Vector) -> Vector {
    let n = x.len();
    let mut xp = x.clone();
    let mut xn = x.clone();
    let mut g = Vector::zeros(n);

    for i in 0..n {
        xp[i] += FD_STEP;
        xn[i] -= FD_STEP;
        g[i] = (objective.value(&xp) - objective.value(&xn)) / (2.0 * FD_STEP);
        xp[i] = x[i];
        xn[i] = x[i];
    }

    g
}

/// Counting adapter around an [`Objective`].
///
/// Counts value and gradient evaluations (monotone, reset only on request)
/// and carries the validation helpers: finite-difference gradients,
/// gradient accuracy and segment convexity checks. Out-of-domain inputs
/// and non-finite values are passed through untouched; domain policing is
/// the solver's responsibility via [`Problem::is_valid`].
pub struct Problem<'a> {
    objective: &'a dyn Objective,
    n_evals: AtomicUsize,
    n_grads: AtomicUsize,
}

impl<'a> Problem<'a> {
    /// Wrap an objective with fresh counters.
    pub fn new(objective: &'a dyn Objective) -> Self {
        Self {
            objective,
            n_evals: AtomicUsize::new(0),
            n_grads: AtomicUsize::new(0),
        }
    }

    /// Problem dimensionality.
    pub fn size(&self) -> usize {
        self.objective.size()
    }

    /// The wrapped objective (for metadata access).
    pub fn objective(&self) -> &dyn Objective {
        self.objective
    }

    /// Evaluate `f(x)`, bumping the value counter.
    pub fn value(&self, x: &Vector) -> Precision {
        debug_assert_eq!(x.len(), self.size(), "dimension mismatch");
        self.n_evals.fetch_add(1, Ordering::Relaxed);
        self.objective.value(x)
    }

    /// Evaluate `f(x)` and its gradient, bumping both counters.
    pub fn value_grad(&self, x: &Vector) -> (Precision, Vector) {
        debug_assert_eq!(x.len(), self.size(), "dimension mismatch");
        self.n_evals.fetch_add(1, Ordering::Relaxed);
        self.n_grads.fetch_add(1, Ordering::Relaxed);

        let mut g = Vector::zeros(x.len());
        let f = self.objective.value_grad(x, &mut g);
        (f, g)
    }

    /// Whether `x` lies in the objective's domain.
    pub fn is_valid(&self, x: &Vector) -> bool {
        self.objective.is_valid(x)
    }

    /// Whether `x` is within `epsilon` of a known minimum.
    pub fn is_minimum(&self, x: &Vector, epsilon: Precision) -> bool {
        self.objective.is_minimum(x, epsilon)
    }

    /// Number of value evaluations so far.
    pub fn eval_count(&self) -> usize {
        self.n_evals.load(Ordering::Relaxed)
    }

    /// Number of gradient evaluations so far.
    pub fn grad_count(&self) -> usize {
        self.n_grads.load(Ordering::Relaxed)
    }

    /// Reset both counters to zero.
    pub fn reset_counts(&self) {
        self.n_evals.store(0, Ordering::Relaxed);
        self.n_grads.store(0, Ordering::Relaxed);
    }

    /// Finite-difference gradient estimate at `x` (validation only).
    pub fn fd_grad(&self, x: &Vector) -> Vector {
        central_difference(self.objective, x)
    }

    /// `||g_analytic(x) - g_fd(x)||_inf`, the gradient accuracy at `x`.
    pub fn grad_accuracy(&self, x: &Vector) -> Precision {
        let (_, g) = self.value_grad(x);
        (g - self.fd_grad(x)).amax()
    }

    /// Sample `steps` convex combinations of `x1` and `x2` and check the
    /// midpoint convexity inequality on each.
    pub fn is_convex_on_segment(&self, x1: &Vector, x2: &Vector, steps: usize) -> bool {
        let f1 = self.value(x1);
        let f2 = self.value(x2);

        for i in 1..steps {
            let t = i as Precision / steps as Precision;
            let xt = x1.scale(1.0 - t) + x2.scale(t);
            if self.value(&xt) > (1.0 - t) * f1 + t * f2 + 1e-8 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{Rosenbrock, Sphere};

    #[test]
    fn test_counters_are_monotone() {
        let sphere = Sphere::new(3);
        let problem = Problem::new(&sphere);
        let x = Vector::from_element(3, 1.0);

        assert_eq!(problem.eval_count(), 0);
        assert_eq!(problem.grad_count(), 0);

        problem.value(&x);
        assert_eq!(problem.eval_count(), 1);
        assert_eq!(problem.grad_count(), 0);

        problem.value_grad(&x);
        assert_eq!(problem.eval_count(), 2);
        assert_eq!(problem.grad_count(), 1);

        problem.reset_counts();
        assert_eq!(problem.eval_count(), 0);
        assert_eq!(problem.grad_count(), 0);
    }

    #[test]
    fn test_fd_gradient_matches_analytic() {
        let rosenbrock = Rosenbrock::new(4);
        let problem = Problem::new(&rosenbrock);
        let x = Vector::from_vec(vec![-0.4, 0.3, 0.9, -1.1]);

        assert!(problem.grad_accuracy(&x) < 1e-6);
    }

    #[test]
    fn test_default_value_grad_uses_central_differences() {
        struct ValueOnly;
        impl Objective for ValueOnly {
            fn size(&self) -> usize {
                2
            }
            fn value(&self, x: &Vector) -> Precision {
                3.0 * x[0] * x[0] + x[1]
            }
        }

        let objective = ValueOnly;
        let problem = Problem::new(&objective);
        let x = Vector::from_vec(vec![2.0, -1.0]);

        let (f, g) = problem.value_grad(&x);
        assert_eq!(f, 11.0);
        assert!((g[0] - 12.0).abs() < 1e-5);
        assert!((g[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_convexity_on_sphere() {
        let sphere = Sphere::new(5);
        let problem = Problem::new(&sphere);
        let x1 = Vector::from_element(5, -2.0);
        let x2 = Vector::from_element(5, 3.0);

        assert!(problem.is_convex_on_segment(&x1, &x2, 16));
    }
}
