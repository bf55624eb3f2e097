use crate::catalog::{Curve, Function};
use crate::point::{Point, Segment};
use crate::roots::{
    chords, fixed_point, intersect_curves, newton, Relaxation, Root, RootSearch, RootSettings,
    RootStatus, SystemSearch,
};

use super::{check_interval, check_precision, Compute, InputError};

// ── Scalar equations ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootMethod {
    #[default]
    Chords,
    Newton,
    FixedPoint,
}

impl RootMethod {
    pub const ALL: [RootMethod; 3] = [RootMethod::Chords, RootMethod::Newton, RootMethod::FixedPoint];

    /// Iteration cap used for this method.
    pub fn max_iter(self) -> usize {
        match self {
            RootMethod::FixedPoint => 200,
            _ => 100,
        }
    }
}

/// Root search for `f(x) = 0` over a built-in `f`.
#[derive(Debug, Clone, PartialEq)]
pub struct RootInput {
    pub function: Function,
    pub method: RootMethod,
    /// Bracket for chords.
    pub low: f64,
    pub high: f64,
    /// Start for Newton and fixed-point iteration.
    pub guess: f64,
    pub precision: f64,
    pub relaxation: Relaxation<f64>,
}

impl Default for RootInput {
    fn default() -> Self {
        Self {
            function: Function::Parabola,
            method: RootMethod::Chords,
            low: 0.1,
            high: 1.0,
            guess: 0.5,
            precision: 1e-3,
            relaxation: Relaxation::default(),
        }
    }
}

/// Result of a root search, keeping the method-specific trace.
#[derive(Debug, Clone, PartialEq)]
pub enum RootOutput {
    Chords(RootSearch<f64, Segment<f64>>),
    Newton(RootSearch<f64, Segment<f64>>),
    FixedPoint(RootSearch<f64, f64>),
}

impl RootOutput {
    pub fn root(&self) -> Option<Root<f64>> {
        match self {
            RootOutput::Chords(s) | RootOutput::Newton(s) => s.root,
            RootOutput::FixedPoint(s) => s.root,
        }
    }

    pub fn status(&self) -> RootStatus {
        match self {
            RootOutput::Chords(s) | RootOutput::Newton(s) => s.status,
            RootOutput::FixedPoint(s) => s.status,
        }
    }
}

impl Compute for RootInput {
    type Output = Result<RootOutput, InputError>;

    /// The bracket is only checked for chords.
    fn compute(&self) -> Result<RootOutput, InputError> {
        check_precision(self.precision)?;
        let f = self.function;
        let settings = RootSettings {
            precision: self.precision,
            max_iter: self.method.max_iter(),
        };
        let output = match self.method {
            RootMethod::Chords => {
                check_interval(self.low, self.high)?;
                RootOutput::Chords(chords(|x| f.eval(x), self.low, self.high, &settings))
            }
            RootMethod::Newton => RootOutput::Newton(newton(
                |x| f.eval(x),
                |x| f.derivative(x),
                self.guess,
                &settings,
            )),
            RootMethod::FixedPoint => RootOutput::FixedPoint(fixed_point(
                |x| f.eval(x),
                self.guess,
                self.relaxation,
                &settings,
            )),
        };
        Ok(output)
    }
}

// ── 2x2 systems ─────────────────────────────────────────────────────

/// Intersection of two built-in curves.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInput {
    pub curves: [Curve; 2],
    pub guess: Point<f64>,
    pub precision: f64,
}

impl Default for SystemInput {
    fn default() -> Self {
        Self {
            curves: [Curve::Parabola, Curve::SinLog],
            guess: Point::new(1.0, 1.0),
            precision: 0.1,
        }
    }
}

impl Compute for SystemInput {
    type Output = Result<SystemSearch<f64>, InputError>;

    fn compute(&self) -> Result<SystemSearch<f64>, InputError> {
        check_precision(self.precision)?;
        let [c1, c2] = self.curves;
        let settings = RootSettings {
            precision: self.precision,
            max_iter: 200,
        };
        Ok(intersect_curves(
            |x| c1.eval(x),
            |x| c1.derivative(x),
            |x| c2.eval(x),
            |x| c2.derivative(x),
            self.guess,
            &settings,
        ))
    }
}
