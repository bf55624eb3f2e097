//! Interactive sessions, one per algorithm family.
//!
//! A session pairs a long-lived, user-edited input with the output of the
//! last computation. Recomputing replaces the output wholesale. [`Task`] is
//! the closed set of sessions a front end switches between.
//!
//! Editable fields are checked before any solver runs; an empty interval,
//! a non-positive precision or zero subdivisions come back as an
//! [`InputError`] output.
//!
//! ```
//! use numlab::task::{Task, TaskKind};
//!
//! let mut task = Task::new(TaskKind::Ode);
//! assert!(!task.has_output());
//! task.recompute();
//! assert!(task.has_output());
//! assert_eq!(task.name(), "Differential equations");
//! ```

mod algebra;
mod calculus;
mod data;


pub use algebra::{RootInput, RootMethod, RootOutput, SystemInput};
pub use calculus::{IntegrationInput, IntegrationOutput, OdeInput, OdeOutput};
pub use data::{FittingInput, Interpolant, InterpMethod, InterpolationInput, InterpolationOutput, NodeSource};

use log::info;

use crate::fit::{Fit, FitError};
use crate::gauss::{GaussOutput, LinearSystem};
use crate::interp::InterpError;

/// An input that can be turned into a fresh output.
pub trait Compute {
    type Output;

    fn compute(&self) -> Self::Output;
}

impl Compute for LinearSystem {
    type Output = GaussOutput<f64>;

    fn compute(&self) -> GaussOutput<f64> {
        self.solve()
    }
}

/// Editable input that no solver accepts.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("interval [{low}, {high}] is empty")]
    EmptyInterval { low: f64, high: f64 },
    #[error("precision must be positive, got {0}")]
    Precision(f64),
    #[error("at least one subdivision is required")]
    NoSubdivisions,
}

pub(crate) fn check_interval(low: f64, high: f64) -> Result<(), InputError> {
    if low < high {
        Ok(())
    } else {
        Err(InputError::EmptyInterval { low, high })
    }
}

pub(crate) fn check_precision(precision: f64) -> Result<(), InputError> {
    if precision > 0.0 {
        Ok(())
    } else {
        Err(InputError::Precision(precision))
    }
}

/// How finely an adaptive method resolves its problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Refine until the error estimate is below the precision.
    Adaptive(f64),
    /// A fixed number of subdivisions.
    Fixed(usize),
}

impl Resolution {
    /// Reject a non-positive precision or a zero subdivision count.
    pub fn check(self) -> Result<(), InputError> {
        match self {
            Resolution::Adaptive(precision) => check_precision(precision),
            Resolution::Fixed(0) => Err(InputError::NoSubdivisions),
            Resolution::Fixed(_) => Ok(()),
        }
    }
}

/// Input plus the output of its last computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Session<I: Compute> {
    pub input: I,
    pub output: Option<I::Output>,
}

impl<I: Compute + Default> Default for Session<I> {
    fn default() -> Self {
        Self::new(I::default())
    }
}

impl<I: Compute> Session<I> {
    pub fn new(input: I) -> Self {
        Self { input, output: None }
    }

    /// Recompute from the current input and return the new output.
    pub fn recompute(&mut self) -> &I::Output {
        self.output.insert(self.input.compute())
    }

    /// Forget the last output, e.g. after an edit.
    pub fn invalidate(&mut self) {
        self.output = None;
    }
}

/// Names the variants of [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Gauss,
    Roots,
    System,
    Integration,
    Fitting,
    Interpolation,
    Ode,
}

impl TaskKind {
    pub const ALL: [TaskKind; 7] = [
        TaskKind::Gauss,
        TaskKind::Roots,
        TaskKind::System,
        TaskKind::Integration,
        TaskKind::Fitting,
        TaskKind::Interpolation,
        TaskKind::Ode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TaskKind::Gauss => "Linear systems",
            TaskKind::Roots => "Nonlinear equations",
            TaskKind::System => "Nonlinear systems",
            TaskKind::Integration => "Integration",
            TaskKind::Fitting => "Approximation",
            TaskKind::Interpolation => "Interpolation",
            TaskKind::Ode => "Differential equations",
        }
    }
}

/// One session of each algorithm family.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Gauss(Session<LinearSystem>),
    Roots(Session<RootInput>),
    System(Session<SystemInput>),
    Integration(Session<IntegrationInput>),
    Fitting(Session<FittingInput>),
    Interpolation(Session<InterpolationInput>),
    Ode(Session<OdeInput>),
}

impl Task {
    /// A session of `kind` with default input and no output.
    pub fn new(kind: TaskKind) -> Self {
        match kind {
            TaskKind::Gauss => Task::Gauss(Session::default()),
            TaskKind::Roots => Task::Roots(Session::default()),
            TaskKind::System => Task::System(Session::default()),
            TaskKind::Integration => Task::Integration(Session::default()),
            TaskKind::Fitting => Task::Fitting(Session::default()),
            TaskKind::Interpolation => Task::Interpolation(Session::default()),
            TaskKind::Ode => Task::Ode(Session::default()),
        }
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Gauss(_) => TaskKind::Gauss,
            Task::Roots(_) => TaskKind::Roots,
            Task::System(_) => TaskKind::System,
            Task::Integration(_) => TaskKind::Integration,
            Task::Fitting(_) => TaskKind::Fitting,
            Task::Interpolation(_) => TaskKind::Interpolation,
            Task::Ode(_) => TaskKind::Ode,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn has_output(&self) -> bool {
        match self {
            Task::Gauss(s) => s.output.is_some(),
            Task::Roots(s) => s.output.is_some(),
            Task::System(s) => s.output.is_some(),
            Task::Integration(s) => s.output.is_some(),
            Task::Fitting(s) => s.output.is_some(),
            Task::Interpolation(s) => s.output.is_some(),
            Task::Ode(s) => s.output.is_some(),
        }
    }

    /// Recompute the active session's output from its input.
    pub fn recompute(&mut self) {
        info!("recomputing {}", self.name());
        match self {
            Task::Gauss(s) => {
                let out = s.recompute();
                info!("gauss: {:?}, swaps = {}", out.solvability, out.swaps);
            }
            Task::Roots(s) => match s.recompute() {
                Ok(out) => info!("roots: {:?}", out.status()),
                Err(e) => info!("roots rejected: {}", e),
            },
            Task::System(s) => match s.recompute() {
                Ok(out) => info!("system: {:?} after {} iterations", out.status, out.iterations),
                Err(e) => info!("system rejected: {}", e),
            },
            Task::Integration(s) => match s.recompute() {
                Ok(out) => info!("integration: {} with n = {}", out.value, out.subdivisions),
                Err(e) => info!("integration rejected: {}", e),
            },
            Task::Fitting(s) => {
                let out: &Result<Fit<f64>, FitError> = s.recompute();
                match out {
                    Ok(fit) => info!("fitting: {} with deviation {}", fit.model, fit.deviation),
                    Err(e) => info!("fitting failed: {}", e),
                }
            }
            Task::Interpolation(s) => {
                let out: &Result<InterpolationOutput, InterpError> = s.recompute();
                match out {
                    Ok(o) => info!("interpolation: p({}) = {}", o.at, o.value),
                    Err(e) => info!("interpolation failed: {}", e),
                }
            }
            Task::Ode(s) => {
                let high = s.input.high;
                match s.recompute() {
                    Ok(out) => info!(
                        "ode: y({}) = {}, reached precision: {}",
                        high,
                        out.solution.end_value(),
                        out.solution.reached_precision
                    ),
                    Err(e) => info!("ode rejected: {}", e),
                }
            }
        }
    }
}
