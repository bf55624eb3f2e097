use crate::catalog::Function;
use crate::fit::{fit, Fit, FitError, ModelSelector};
use crate::interp::{EvenlySpaced, InterpError, LagrangePolynomial, NewtonInterp};
use crate::point::Point;

use super::Compute;

// ── Least squares ───────────────────────────────────────────────────

/// Points to approximate and the model choice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FittingInput {
    pub points: Vec<Point<f64>>,
    pub selector: ModelSelector,
}

impl Compute for FittingInput {
    type Output = Result<Fit<f64>, FitError>;

    /// An empty point set is reported as [`FitError::Degenerate`].
    fn compute(&self) -> Result<Fit<f64>, FitError> {
        if self.points.is_empty() {
            return Err(FitError::Degenerate);
        }
        fit(&self.points, self.selector)
    }
}

// ── Interpolation ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpMethod {
    /// Arbitrary nodes from [`InterpolationInput::points`].
    Lagrange,
    /// Evenly spaced nodes from [`InterpolationInput::samples`].
    #[default]
    Newton,
}

/// Where the Newton samples come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeSource {
    /// `samples.values` as entered.
    #[default]
    Values,
    /// Overwrite `samples.values` with a built-in function at the nodes.
    Sampled(Function),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationInput {
    pub method: InterpMethod,
    pub points: Vec<Point<f64>>,
    pub samples: EvenlySpaced<f64>,
    pub source: NodeSource,
    /// Where the interpolant is evaluated for display.
    pub at: f64,
}

impl Default for InterpolationInput {
    fn default() -> Self {
        Self {
            method: InterpMethod::Newton,
            points: Vec::new(),
            samples: EvenlySpaced::default(),
            source: NodeSource::Values,
            at: 1.0,
        }
    }
}

impl InterpolationInput {
    /// The Newton samples after applying [`NodeSource`].
    pub fn resolved_samples(&self) -> EvenlySpaced<f64> {
        match self.source {
            NodeSource::Values => self.samples.clone(),
            NodeSource::Sampled(f) => {
                let n = self.samples.values.len().max(2);
                EvenlySpaced::sample(|x| f.eval(x), self.samples.low, self.samples.high, n)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interpolant {
    Lagrange(LagrangePolynomial<f64>),
    Newton(NewtonInterp<f64>),
}

impl Interpolant {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Interpolant::Lagrange(p) => p.eval(x),
            Interpolant::Newton(p) => p.eval(x),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationOutput {
    pub interpolant: Interpolant,
    pub at: f64,
    pub value: f64,
}

impl Compute for InterpolationInput {
    type Output = Result<InterpolationOutput, InterpError>;

    fn compute(&self) -> Result<InterpolationOutput, InterpError> {
        let interpolant = match self.method {
            InterpMethod::Lagrange => Interpolant::Lagrange(LagrangePolynomial::new(self.points.clone())?),
            InterpMethod::Newton => Interpolant::Newton(NewtonInterp::new(&self.resolved_samples())?),
        };
        Ok(InterpolationOutput {
            value: interpolant.eval(self.at),
            at: self.at,
            interpolant,
        })
    }
}
