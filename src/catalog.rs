//! Built-in functions and equations offered by the task panels.
//!
//! Each entry is a plain variant with closed-form evaluation, so callers
//! can hand `|x| f.eval(x)` to any solver.

use core::fmt;

use crate::special::erf;

// ── Scalar functions ────────────────────────────────────────────────

/// Function of one variable used by root search, quadrature and
/// interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `x² − 0.9`
    Parabola,
    /// `sin(x)·ln(2x + 2) − 0.5`
    SinLog,
    /// `exp(−x²) − 0.5`
    Gaussian,
    /// `sqrt(x + 3) − 3.333`
    ShiftedSqrt,
    /// `sin(x)·exp(x)`
    SinExp,
    /// `1/x`
    Reciprocal,
}

impl Function {
    /// Choices for root search.
    pub const ROOTS: [Function; 4] = [
        Function::Parabola,
        Function::SinLog,
        Function::Gaussian,
        Function::ShiftedSqrt,
    ];

    /// Choices for quadrature; all have antiderivatives.
    pub const INTEGRANDS: [Function; 3] = [Function::Parabola, Function::SinExp, Function::Gaussian];

    /// Choices for sampling interpolation nodes.
    pub const SAMPLED: [Function; 4] = [
        Function::Gaussian,
        Function::Parabola,
        Function::SinExp,
        Function::Reciprocal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::Parabola => "x² - 0.9",
            Function::SinLog => "sin(x) ln(2x + 2) - 0.5",
            Function::Gaussian => "exp(-x²) - 0.5",
            Function::ShiftedSqrt => "sqrt(x + 3) - 3.333",
            Function::SinExp => "sin(x) exp(x)",
            Function::Reciprocal => "1/x",
        }
    }

    pub fn eval(self, x: f64) -> f64 {
        match self {
            Function::Parabola => x * x - 0.9,
            Function::SinLog => x.sin() * (2.0 * x + 2.0).ln() - 0.5,
            Function::Gaussian => (-x * x).exp() - 0.5,
            Function::ShiftedSqrt => (x + 3.0).sqrt() - 3.333,
            Function::SinExp => x.sin() * x.exp(),
            Function::Reciprocal => 1.0 / x,
        }
    }

    pub fn derivative(self, x: f64) -> f64 {
        match self {
            Function::Parabola => 2.0 * x,
            Function::SinLog => x.sin() / (x + 1.0) + (2.0 * x + 2.0).ln() * x.cos(),
            Function::Gaussian => -2.0 * x * (-x * x).exp(),
            Function::ShiftedSqrt => 0.5 / (x + 3.0).sqrt(),
            Function::SinExp => x.exp() * (x.sin() + x.cos()),
            Function::Reciprocal => -1.0 / (x * x),
        }
    }

    /// Closed-form antiderivative, where one exists in elementary terms
    /// (or via `erf`).
    pub fn antiderivative(self, x: f64) -> Option<f64> {
        match self {
            Function::Parabola => Some(x * x * x / 3.0 - 0.9 * x),
            Function::Gaussian => Some(0.5 * core::f64::consts::PI.sqrt() * erf(x) - 0.5 * x),
            Function::SinExp => Some(0.5 * x.exp() * (x.sin() - x.cos())),
            Function::Reciprocal => Some(x.abs().ln()),
            Function::SinLog | Function::ShiftedSqrt => None,
        }
    }

    /// `F(high) − F(low)` when an antiderivative is known.
    pub fn exact_integral(self, low: f64, high: f64) -> Option<f64> {
        Some(self.antiderivative(high)? - self.antiderivative(low)?)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Curves for the 2×2 system ───────────────────────────────────────

/// Curve `y = c(x)` intersected by the 2×2 Newton search.
///
/// The implicit form is `c(x) − y = 0`, so `∂/∂y = −1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    Parabola,
    SinLog,
    Gaussian,
    /// `sqrt(x + 3)`
    Sqrt,
}

impl Curve {
    pub const ALL: [Curve; 4] = [Curve::Parabola, Curve::SinLog, Curve::Gaussian, Curve::Sqrt];

    pub fn name(self) -> &'static str {
        match self {
            Curve::Sqrt => "sqrt(x + 3)",
            other => other.shared().name(),
        }
    }

    pub fn eval(self, x: f64) -> f64 {
        match self {
            Curve::Sqrt => (x + 3.0).sqrt(),
            other => other.shared().eval(x),
        }
    }

    pub fn derivative(self, x: f64) -> f64 {
        match self {
            Curve::Sqrt => 0.5 / (x + 3.0).sqrt(),
            other => other.shared().derivative(x),
        }
    }

    fn shared(self) -> Function {
        match self {
            Curve::Parabola => Function::Parabola,
            Curve::SinLog => Function::SinLog,
            Curve::Gaussian => Function::Gaussian,
            Curve::Sqrt => Function::ShiftedSqrt,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Differential equations ──────────────────────────────────────────

/// First-order ODE `y' = f(x, y)` with a closed-form solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equation {
    /// `y' = y + (1 + x) y²`
    Riccati,
    /// `y' = xy`
    Product,
    /// `y' = x + y`
    Sum,
}

impl Equation {
    pub const ALL: [Equation; 3] = [Equation::Riccati, Equation::Product, Equation::Sum];

    pub fn name(self) -> &'static str {
        match self {
            Equation::Riccati => "y' = y + (1 + x) y²",
            Equation::Product => "y' = xy",
            Equation::Sum => "y' = x + y",
        }
    }

    /// Right-hand side `f(x, y)`.
    pub fn slope(self, x: f64, y: f64) -> f64 {
        match self {
            Equation::Riccati => y + (1.0 + x) * y * y,
            Equation::Product => x * y,
            Equation::Sum => x + y,
        }
    }

    /// Solution through `(x0, y0)` evaluated at `x`.
    ///
    /// The Riccati solution has a pole where `C + x eˣ = 0`; past it the
    /// value is meaningless. It also needs `y0 ≠ 0`.
    ///
    /// ```
    /// use numlab::catalog::Equation;
    ///
    /// let y = Equation::Sum.exact(0.0, 0.3, 1.0);
    /// assert!((y - (1.3 * 1.0_f64.exp() - 2.0)).abs() < 1e-14);
    /// ```
    pub fn exact(self, x0: f64, y0: f64, x: f64) -> f64 {
        match self {
            Equation::Riccati => {
                let ex0 = x0.exp();
                let c = -ex0 / y0 - x0 * ex0;
                let ex = x.exp();
                -ex / (c + ex * x)
            }
            Equation::Product => {
                let c = y0 / (x0 * x0 * 0.5).exp();
                c * (x * x * 0.5).exp()
            }
            Equation::Sum => {
                let c = (y0 + x0 + 1.0) / x0.exp();
                c * x.exp() - x - 1.0
            }
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
