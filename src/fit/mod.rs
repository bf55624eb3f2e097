//! Least-squares curve fitting.
//!
//! Polynomial models solve the normal equations by Cramer's rule over
//! [`gauss::determinant`](crate::gauss::determinant). Exponential,
//! logarithmic and power models are linear fits of log-transformed points.
//! [`fit`] with [`ModelSelector::BestFit`] tries every model and keeps the
//! one with the lowest RMS deviation.
//!
//! # Example
//!
//! ```
//! use numlab::fit::{fit, Model, ModelSelector};
//! use numlab::point::Point;
//!
//! let pts: Vec<Point<f64>> = (1..=6)
//!     .map(|i| { let x = i as f64; Point::new(x, 2.0 * (0.5 * x).exp()) })
//!     .collect();
//! let best = fit(&pts, ModelSelector::BestFit).unwrap();
//! assert_eq!(best.model, Model::Exponential);
//! assert!((best.terms()[0] - 2.0).abs() < 1e-9);
//! assert!((best.terms()[1] - 0.5).abs() < 1e-9);
//! ```

mod models;
mod poly;

#[cfg(test)]
mod tests;

pub use models::{correlation, deviation, fit, fit_model};
pub use poly::polynomial_fit;

use core::fmt;

use crate::traits::FloatScalar;

/// A fitted model family.
///
/// Coefficient layout per model (see [`Fit::eval`]):
///
/// | Model | Formula | Coefficients |
/// |---|---|---|
/// | `Linear` | `a x + b` | `[a, b]` |
/// | `Quadratic` | `a + b x + c x²` | `[a, b, c]` |
/// | `Cubic` | `a + b x + c x² + d x³` | `[a, b, c, d]` |
/// | `Exponential` | `a e^(b x)` | `[a, b]` |
/// | `Logarithmic` | `a ln x + b` | `[a, b]` |
/// | `Power` | `a x^b` | `[a, b]` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Linear,
    Quadratic,
    Cubic,
    Exponential,
    Logarithmic,
    Power,
}

impl Model {
    /// Every model, in the order best-fit search tries them.
    pub const ALL: [Model; 6] = [
        Model::Linear,
        Model::Quadratic,
        Model::Cubic,
        Model::Exponential,
        Model::Logarithmic,
        Model::Power,
    ];

    pub fn num_coefficients(self) -> usize {
        match self {
            Model::Quadratic => 3,
            Model::Cubic => 4,
            _ => 2,
        }
    }

    /// Smallest `x` the fitted curve is defined above: zero for models with
    /// `ln x` or `x^b`, minus infinity otherwise.
    pub fn domain_min<T: FloatScalar>(self) -> T {
        match self {
            Model::Logarithmic | Model::Power => T::zero(),
            _ => T::neg_infinity(),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Model::Linear => "linear",
            Model::Quadratic => "quadratic",
            Model::Cubic => "cubic",
            Model::Exponential => "exponential",
            Model::Logarithmic => "logarithmic",
            Model::Power => "power",
        };
        f.write_str(name)
    }
}

/// Which model(s) [`fit`] should try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSelector {
    /// Try every model, keep the lowest deviation.
    #[default]
    BestFit,
    Fixed(Model),
}

/// Errors from least-squares fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    /// The normal equations are singular, e.g. too few distinct `x`.
    #[error("normal equations are singular; too few distinct points")]
    Degenerate,
    /// A point lies outside the domain of the model's transform.
    #[error("{0} model needs positive coordinates for its log transform")]
    Domain(Model),
}

/// A fitted curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit<T> {
    pub model: Model,
    /// Coefficients, unused trailing slots are zero.
    pub coefficients: [T; 4],
    /// RMS of `f(x_i) - y_i`.
    pub deviation: T,
    /// Pearson correlation of the raw points, linear model only.
    pub correlation: Option<T>,
}

impl<T: FloatScalar> Fit<T> {
    /// The coefficients the model actually uses.
    pub fn terms(&self) -> &[T] {
        &self.coefficients[..self.model.num_coefficients()]
    }

    /// Evaluate the fitted curve.
    pub fn eval(&self, x: T) -> T {
        let [a, b, c, d] = self.coefficients;
        match self.model {
            Model::Linear => a * x + b,
            Model::Quadratic => a + x * (b + x * c),
            Model::Cubic => a + x * (b + x * (c + x * d)),
            Model::Exponential => a * (b * x).exp(),
            Model::Logarithmic => a * x.ln() + b,
            Model::Power => a * x.powf(b),
        }
    }
}
