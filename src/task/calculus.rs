use crate::catalog::{Equation, Function};
use crate::ode::{self, solve_adaptive, OdeSolution};
use crate::quad::{self, integrate};

use super::{check_interval, Compute, InputError, Resolution};

// ── Quadrature ──────────────────────────────────────────────────────

/// Definite integral of a built-in function.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationInput {
    pub function: Function,
    pub method: quad::Method,
    pub low: f64,
    pub high: f64,
    pub resolution: Resolution,
}

impl Default for IntegrationInput {
    fn default() -> Self {
        Self {
            function: Function::Parabola,
            method: quad::Method::default(),
            low: -0.5,
            high: 1.3,
            resolution: Resolution::Adaptive(0.01),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationOutput {
    pub value: f64,
    /// From the antiderivative, when the function has one.
    pub exact: Option<f64>,
    pub subdivisions: usize,
    /// Runge estimate, adaptive runs only.
    pub error_estimate: Option<f64>,
    pub converged: bool,
    pub diverges: bool,
}

impl Compute for IntegrationInput {
    type Output = Result<IntegrationOutput, InputError>;

    fn compute(&self) -> Result<IntegrationOutput, InputError> {
        check_interval(self.low, self.high)?;
        self.resolution.check()?;
        let f = self.function;
        let exact = f.exact_integral(self.low, self.high);
        let output = match self.resolution {
            Resolution::Adaptive(precision) => {
                let settings = quad::AdaptiveSettings {
                    precision,
                    ..quad::AdaptiveSettings::default()
                };
                let r = integrate(|x| f.eval(x), self.low, self.high, self.method, &settings);
                IntegrationOutput {
                    value: r.value,
                    exact,
                    subdivisions: r.subdivisions,
                    error_estimate: Some(r.error_estimate),
                    converged: r.converged,
                    diverges: r.diverges,
                }
            }
            Resolution::Fixed(n) => IntegrationOutput {
                value: self.method.apply(|x| f.eval(x), self.low, self.high, n),
                exact,
                subdivisions: n,
                error_estimate: None,
                converged: false,
                diverges: false,
            },
        };
        Ok(output)
    }
}

// ── Differential equations ──────────────────────────────────────────

/// Milne corrector tolerance when no precision target is given.
const FIXED_CORRECTOR_EPS: f64 = 1e-9;

/// Initial value problem over a built-in equation.
#[derive(Debug, Clone, PartialEq)]
pub struct OdeInput {
    pub equation: Equation,
    pub method: ode::Method,
    pub low: f64,
    pub high: f64,
    /// `y(low)`.
    pub y0: f64,
    pub resolution: Resolution,
}

impl Default for OdeInput {
    fn default() -> Self {
        Self {
            equation: Equation::Riccati,
            method: ode::Method::Milne,
            low: 0.0,
            high: 1.0,
            y0: 0.3,
            resolution: Resolution::Adaptive(0.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OdeOutput {
    /// A fixed run reports `reached_precision = false` and zero doublings.
    pub solution: OdeSolution<f64>,
    /// Closed-form solution at `high`, for comparison.
    pub exact_end: f64,
}

impl OdeOutput {
    /// Distance of the computed endpoint from the closed form.
    pub fn end_error(&self) -> f64 {
        (self.solution.end_value() - self.exact_end).abs()
    }
}

impl Compute for OdeInput {
    type Output = Result<OdeOutput, InputError>;

    fn compute(&self) -> Result<OdeOutput, InputError> {
        check_interval(self.low, self.high)?;
        self.resolution.check()?;
        let eq = self.equation;
        let slope = |x, y| eq.slope(x, y);
        let solution = match self.resolution {
            Resolution::Adaptive(precision) => {
                let settings = ode::AdaptiveSettings {
                    precision,
                    ..ode::AdaptiveSettings::default()
                };
                solve_adaptive(slope, self.low, self.high, self.y0, self.method, &settings)
            }
            Resolution::Fixed(intervals) => {
                let (points, stats) =
                    self.method
                        .run(slope, self.low, self.high, self.y0, intervals, FIXED_CORRECTOR_EPS);
                OdeSolution {
                    points,
                    step: (self.high - self.low) / intervals as f64,
                    reached_precision: false,
                    doublings: 0,
                    endpoint_change: f64::NAN,
                    corrector_iterations: stats.max_iterations,
                }
            }
        };
        Ok(OdeOutput {
            solution,
            exact_end: eq.exact(self.low, self.y0, self.high),
        })
    }
}
