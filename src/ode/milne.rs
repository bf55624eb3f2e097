use crate::point::Point;
use crate::traits::FloatScalar;

use super::rk4::runge_kutta4;

/// Corrector iterations allowed per Milne step.
pub const MILNE_MAX_CORRECTIONS: usize = 10;

/// How hard the Milne corrector had to work over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorrectorStats {
    /// Most corrector iterations any step needed.
    pub max_iterations: usize,
    /// Steps that used every iteration without settling.
    pub unsettled_steps: usize,
}

/// Milne predictor-corrector, `count` samples from `(low, y0)`.
///
/// The first four samples come from [`runge_kutta4`]. Each later sample is
/// predicted with
/// `yᵢ = yᵢ₋₄ + 4h/3 (2fᵢ₋₃ - fᵢ₋₂ + 2fᵢ₋₁)`
/// and refined with Simpson's corrector
/// `yᵢ = yᵢ₋₂ + h/3 (fᵢ₋₂ + 4fᵢ₋₁ + f(xᵢ, yᵢ))`
/// until two successive values differ by less than `eps`, at most
/// [`MILNE_MAX_CORRECTIONS`] times. Slopes of accepted samples are cached.
///
/// With five samples or fewer the whole run is plain Runge-Kutta.
///
/// Panics if `count == 0`.
pub fn milne<T: FloatScalar>(
    mut f: impl FnMut(T, T) -> T,
    low: T,
    y0: T,
    step: T,
    count: usize,
    eps: T,
) -> (Vec<Point<T>>, CorrectorStats) {
    if count <= 5 {
        return (runge_kutta4(f, low, y0, step, count), CorrectorStats::default());
    }

    let mut points = runge_kutta4(&mut f, low, y0, step, 4);
    points.reserve(count - 4);
    let mut slopes: Vec<T> = points.iter().map(|p| f(p.x, p.y)).collect();
    let mut stats = CorrectorStats::default();

    let three = T::from(3.0).unwrap();
    let four = T::from(4.0).unwrap();
    let two = T::from(2.0).unwrap();

    for i in 4..count {
        let x = low + T::from(i).unwrap() * step;
        let mut y = points[i - 4].y
            + four * step * (two * slopes[i - 3] - slopes[i - 2] + two * slopes[i - 1]) / three;

        let mut iterations = 0;
        let mut settled = false;
        while iterations < MILNE_MAX_CORRECTIONS {
            iterations += 1;
            let corrected =
                points[i - 2].y + step * (slopes[i - 2] + four * slopes[i - 1] + f(x, y)) / three;
            let delta = (corrected - y).abs();
            y = corrected;
            if delta < eps {
                settled = true;
                break;
            }
        }

        stats.max_iterations = stats.max_iterations.max(iterations);
        if !settled {
            stats.unsettled_steps += 1;
        }
        points.push(Point::new(x, y));
        slopes.push(f(x, y));
    }

    (points, stats)
}
