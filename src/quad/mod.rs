//! Numerical integration of `f(x)` over `[low, high]`.
//!
//! Fixed-count rules ([`rectangle`], [`trapezoid`], [`simpson`]) are pure
//! functions of the subdivision count. [`integrate`] wraps any of them in a
//! step-doubling loop that stops once the Runge error estimate drops below
//! the requested precision.
//!
//! # Example
//!
//! ```
//! use numlab::quad::{integrate, AdaptiveSettings, Method};
//!
//! let settings = AdaptiveSettings { precision: 1e-8, ..AdaptiveSettings::default() };
//! let r = integrate(|x: f64| x * x, 0.0, 3.0, Method::Simpson, &settings);
//! assert!(r.converged);
//! assert!((r.value - 9.0).abs() < 1e-8);
//! ```

mod adaptive;
mod rules;


pub use adaptive::{integrate, AdaptiveSettings, Integral};
pub use rules::{rectangle, simpson, trapezoid};

use crate::traits::FloatScalar;

/// Where the rectangle rule samples inside each subinterval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectOffset {
    Left,
    #[default]
    Middle,
    Right,
}

/// Quadrature rule selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Rectangle(RectOffset),
    Trapezoid,
    Simpson,
}

impl Method {
    /// Every rule, in display order.
    pub const ALL: [Method; 5] = [
        Method::Rectangle(RectOffset::Left),
        Method::Rectangle(RectOffset::Middle),
        Method::Rectangle(RectOffset::Right),
        Method::Trapezoid,
        Method::Simpson,
    ];

    /// Apply the rule with `n` subdivisions.
    pub fn apply<T: FloatScalar>(self, f: impl FnMut(T) -> T, low: T, high: T, n: usize) -> T {
        match self {
            Method::Rectangle(offset) => rectangle(f, low, high, n, offset),
            Method::Trapezoid => trapezoid(f, low, high, n),
            Method::Simpson => simpson(f, low, high, n),
        }
    }

    /// Error order `p` of the rule: halving the step divides the error by `2^p`.
    pub fn order(self) -> u32 {
        match self {
            Method::Rectangle(RectOffset::Left | RectOffset::Right) => 1,
            Method::Rectangle(RectOffset::Middle) | Method::Trapezoid => 2,
            Method::Simpson => 4,
        }
    }

    /// Runge factor `2^p - 1` dividing the difference of two successive
    /// doublings.
    pub fn runge_factor<T: FloatScalar>(self) -> T {
        T::from((1u32 << self.order()) - 1).unwrap()
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Rectangle(RectOffset::default())
    }
}
