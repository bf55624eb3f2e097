//! Root finding for scalar equations and 2x2 systems.
//!
//! Every method records a trace of its intermediate approximations and
//! reports non-convergence as a [`RootStatus`], never as an error:
//!
//! - [`chords`]: regula falsi on a sign-change bracket, traced as bracket
//!   segments.
//! - [`newton`]: tangent iteration, traced as tangent segments.
//! - [`fixed_point`]: relaxed iteration `x <- x + λ f(x)`, traced as iterates.
//! - [`newton_system`] / [`intersect_curves`]: Newton on two equations in two
//!   unknowns with a closed-form 2x2 step, traced as successive guesses.

mod chords;
mod fixed_point;
mod newton;
mod system;

#[cfg(test)]
mod tests;

pub use chords::chords;
pub use fixed_point::{fixed_point, Relaxation};
pub use newton::newton;
pub use system::{intersect_curves, newton_system, SystemSearch};

/// Settings for the iterative root finders.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Target for `|f(x)|`, or for the step length where a method checks it.
    pub precision: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            precision: 1e-3,
            max_iter: 100,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            precision: 1e-3,
            max_iter: 100,
        }
    }
}

impl<T> RootSettings<T> {
    /// Same precision with a different iteration cap.
    pub fn with_max_iter(self, max_iter: usize) -> Self {
        Self { max_iter, ..self }
    }
}

/// How a root search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    /// The precision target was met.
    Converged,
    /// `f(low)` and `f(high)` have the same sign.
    NotBracketed,
    /// A derivative (or Jacobian determinant) was exactly zero.
    ZeroDerivative,
    /// An iterate became infinite or NaN.
    Diverged,
    /// `max_iter` iterations ran without meeting the target.
    IterationLimit,
}

/// An accepted root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root<T> {
    pub x: T,
    /// `f(x)`.
    pub fx: T,
    /// Iterations performed.
    pub iterations: usize,
}

/// Result of a scalar root search.
///
/// `S` is the trace element: a [`Segment`](crate::point::Segment) for
/// chords and Newton, a plain iterate for fixed-point iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSearch<T, S> {
    pub trace: Vec<S>,
    /// Present exactly when `status` is [`RootStatus::Converged`].
    pub root: Option<Root<T>>,
    pub status: RootStatus,
}

impl<T, S> RootSearch<T, S> {
    pub(crate) fn failed(trace: Vec<S>, status: RootStatus) -> Self {
        Self {
            trace,
            root: None,
            status,
        }
    }

    pub(crate) fn converged(trace: Vec<S>, root: Root<T>) -> Self {
        Self {
            trace,
            root: Some(root),
            status: RootStatus::Converged,
        }
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status == RootStatus::Converged
    }
}
