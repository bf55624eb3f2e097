use log::{debug, trace, warn};

use crate::point::Point;
use crate::traits::FloatScalar;

use super::Method;

/// Settings for [`solve_adaptive`].
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveSettings<T> {
    /// Target for the endpoint difference, before Runge scaling.
    pub precision: T,
    /// Interval count of the first run. Raised to
    /// [`Method::min_intervals`] when smaller.
    pub initial_intervals: usize,
    /// Cap on the number of doublings.
    pub max_doublings: usize,
}

impl Default for AdaptiveSettings<f64> {
    fn default() -> Self {
        Self {
            precision: 0.1,
            initial_intervals: 2,
            max_doublings: 14,
        }
    }
}

impl Default for AdaptiveSettings<f32> {
    fn default() -> Self {
        Self {
            precision: 0.1,
            initial_intervals: 2,
            max_doublings: 14,
        }
    }
}

/// Trajectory returned by [`solve_adaptive`].
#[derive(Debug, Clone, PartialEq)]
pub struct OdeSolution<T> {
    /// Samples `(xᵢ, yᵢ)` of the accepted run, `points[0] = (low, y0)`.
    pub points: Vec<Point<T>>,
    pub step: T,
    /// The endpoint settled before the doubling cap.
    pub reached_precision: bool,
    pub doublings: usize,
    /// Last endpoint difference between consecutive resolutions.
    pub endpoint_change: T,
    /// Milne corrector statistic for the returned run, zero otherwise.
    pub corrector_iterations: usize,
}

impl<T: FloatScalar> OdeSolution<T> {
    /// Value at the right end of the interval.
    pub fn end_value(&self) -> T {
        self.points.last().map_or(T::nan(), |p| p.y)
    }
}

/// Integrate `y' = f(x, y)` on `[low, high]` from `y(low) = y0`, doubling
/// the interval count until
/// `|y₂ₙ(high) - yₙ(high)| < precision · k`
/// where `k` is [`Method::runge_factor`]. The finer of the two runs is
/// returned.
///
/// When the cap is hit the last run is returned with
/// `reached_precision = false`. For Milne, `precision` is also the corrector
/// tolerance.
///
/// Panics unless `low < high` and `precision > 0`.
pub fn solve_adaptive<T: FloatScalar>(
    mut f: impl FnMut(T, T) -> T,
    low: T,
    high: T,
    y0: T,
    method: Method,
    settings: &AdaptiveSettings<T>,
) -> OdeSolution<T> {
    assert!(low < high, "empty interval");
    assert!(settings.precision > T::zero(), "precision must be positive");

    let bound = settings.precision * method.runge_factor::<T>();
    let mut intervals = settings.initial_intervals.max(method.min_intervals());
    let (mut points, mut stats) = method.run(&mut f, low, high, y0, intervals, settings.precision);
    let mut change = T::infinity();

    for doubling in 1..=settings.max_doublings {
        intervals *= 2;
        let (finer, finer_stats) = method.run(&mut f, low, high, y0, intervals, settings.precision);
        change = (end(&finer) - end(&points)).abs();
        trace!("ode {:?}: n = {}, y(high) = {:?}, change = {:?}", method, intervals, end(&finer), change);
        points = finer;
        stats = finer_stats;

        if change < bound {
            debug!("ode {:?}: settled at n = {}", method, intervals);
            return OdeSolution {
                points,
                step: (high - low) / T::from(intervals).unwrap(),
                reached_precision: true,
                doublings: doubling,
                endpoint_change: change,
                corrector_iterations: stats.max_iterations,
            };
        }
    }

    warn!(
        "ode {:?}: precision {:?} not reached after {} doublings",
        method, settings.precision, settings.max_doublings
    );
    OdeSolution {
        points,
        step: (high - low) / T::from(intervals).unwrap(),
        reached_precision: false,
        doublings: settings.max_doublings,
        endpoint_change: change,
        corrector_iterations: stats.max_iterations,
    }
}

fn end<T: FloatScalar>(points: &[Point<T>]) -> T {
    points.last().map_or(T::nan(), |p| p.y)
}
