//! Fixed-step integrators for scalar ODEs `y' = f(x, y)` and a
//! step-doubling driver.
//!
//! | Method | Order | Runge factor `2^p - 1` |
//! |---|---|---|
//! | [`euler_modified`] | 2 | 3 |
//! | [`runge_kutta4`] | 4 | 15 |
//! | [`milne`] | 4 (predictor-corrector) | 1 |
//!
//! Each integrator returns `count` samples `(low + i·step, yᵢ)`.
//! [`solve_adaptive`] doubles the number of intervals until the value at the
//! right end moves by less than `precision` times the Runge factor.
//!
//! # Example
//!
//! ```
//! use numlab::ode::{solve_adaptive, AdaptiveSettings, Method};
//!
//! // y' = x + y, y(0) = 0.3  =>  y = 1.3 eˣ - x - 1
//! let settings = AdaptiveSettings { precision: 1e-6, ..AdaptiveSettings::default() };
//! let sol = solve_adaptive(|x, y| x + y, 0.0, 1.0, 0.3, Method::RungeKutta4, &settings);
//! assert!(sol.reached_precision);
//! let end = sol.points.last().unwrap();
//! assert!((end.y - (1.3 * 1.0_f64.exp() - 2.0)).abs() < 1e-5);
//! ```

mod adaptive;
mod euler;
mod milne;
mod rk4;

#[cfg(test)]
mod tests;

pub use adaptive::{solve_adaptive, AdaptiveSettings, OdeSolution};
pub use euler::{euler_modified, euler_modified_step};
pub use milne::{milne, CorrectorStats, MILNE_MAX_CORRECTIONS};
pub use rk4::{rk4_step, runge_kutta4};

use crate::point::Point;
use crate::traits::FloatScalar;

/// Integrator selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    EulerModified,
    #[default]
    RungeKutta4,
    Milne,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::EulerModified, Method::RungeKutta4, Method::Milne];

    /// Factor `k` in the acceptance test `|y₂ₙ - yₙ| < precision·k`.
    ///
    /// Milne compares raw differences.
    pub fn runge_factor<T: FloatScalar>(self) -> T {
        match self {
            Method::EulerModified => T::from(3.0).unwrap(),
            Method::RungeKutta4 => T::from(15.0).unwrap(),
            Method::Milne => T::one(),
        }
    }

    /// Smallest interval count worth starting a doubling sequence from.
    pub fn min_intervals(self) -> usize {
        match self {
            Method::Milne => 8,
            _ => 1,
        }
    }

    /// Run the integrator with `intervals` equal steps over `[low, high]`.
    ///
    /// `eps` is the corrector tolerance, used by Milne only.
    pub fn run<T: FloatScalar>(
        self,
        f: impl FnMut(T, T) -> T,
        low: T,
        high: T,
        y0: T,
        intervals: usize,
        eps: T,
    ) -> (Vec<Point<T>>, CorrectorStats) {
        assert!(intervals > 0, "need at least one interval");
        let step = (high - low) / T::from(intervals).unwrap();
        let count = intervals + 1;
        match self {
            Method::EulerModified => (euler_modified(f, low, y0, step, count), CorrectorStats::default()),
            Method::RungeKutta4 => (runge_kutta4(f, low, y0, step, count), CorrectorStats::default()),
            Method::Milne => milne(f, low, y0, step, count, eps),
        }
    }
}
