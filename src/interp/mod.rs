//! Polynomial interpolation through sampled points.
//!
//! - [`LagrangePolynomial`]: direct Lagrange form over arbitrary distinct
//!   nodes, evaluated in O(n²) without precomputation.
//! - [`NewtonInterp`]: Newton's forward/backward difference formulas over
//!   evenly spaced samples ([`EvenlySpaced`]), built on a
//!   [`FiniteDifferences`] table.
//!
//! # Example
//!
//! ```
//! use numlab::interp::{EvenlySpaced, LagrangePolynomial, NewtonInterp};
//! use numlab::point::Point;
//!
//! let pts = vec![Point::new(0.0_f64, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 4.0)];
//! let lagrange = LagrangePolynomial::new(pts).unwrap();
//! assert!((lagrange.eval(1.5) - 2.25).abs() < 1e-12);
//!
//! let samples = EvenlySpaced::sample(|x: f64| x * x, 0.0, 2.0, 3);
//! let newton = NewtonInterp::new(&samples).unwrap();
//! assert!((newton.eval(1.5) - 2.25).abs() < 1e-12);
//! ```

mod lagrange;
mod newton;


pub use lagrange::LagrangePolynomial;
pub use newton::{EvenlySpaced, FiniteDifferences, NewtonInterp};

/// Errors from interpolant construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InterpError {
    /// Not enough data points for the interpolation method.
    #[error("not enough points to interpolate")]
    TooFewPoints,
    /// Two nodes share the same `x`.
    #[error("interpolation nodes must have distinct x")]
    DuplicateNodes,
    /// `xs` and `ys` have different lengths.
    #[error("x and y sample counts differ")]
    LengthMismatch,
}
