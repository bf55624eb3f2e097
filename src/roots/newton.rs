use log::debug;

use crate::point::{Point, Segment};
use crate::traits::FloatScalar;

use super::{Root, RootSearch, RootSettings, RootStatus};

/// Newton's method for a scalar equation.
///
/// Iterates `x <- x - f(x) / f'(x)` from `guess`, recording the tangent
/// segment from `(x, f(x))` to `(x_next, 0)` at each step. Stops with
/// success when `|f(x)| < precision`, or with [`RootStatus::ZeroDerivative`]
/// on a flat tangent.
///
/// # Example
///
/// ```
/// use numlab::roots::{newton, RootSettings};
///
/// let s = newton(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0, &RootSettings::default());
/// let r = s.root.unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-3);
/// assert_eq!(s.trace.len(), r.iterations);
/// ```
pub fn newton<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    guess: T,
    settings: &RootSettings<T>,
) -> RootSearch<T, Segment<T>> {
    let mut x = guess;
    let mut trace = Vec::new();

    for iter in 0..settings.max_iter {
        let fx = f(x);
        if fx.abs() < settings.precision {
            debug!("newton: root {:?} after {} steps", x, iter);
            return RootSearch::converged(
                trace,
                Root {
                    x,
                    fx,
                    iterations: iter,
                },
            );
        }

        let slope = df(x);
        if slope == T::zero() {
            debug!("newton: flat tangent at {:?}", x);
            return RootSearch::failed(trace, RootStatus::ZeroDerivative);
        }

        let next = x - fx / slope;
        trace.push(Segment::new(Point::new(x, fx), Point::new(next, T::zero())));
        if !next.is_finite() {
            return RootSearch::failed(trace, RootStatus::Diverged);
        }
        x = next;
    }

    debug!("newton: no root within {} steps", settings.max_iter);
    RootSearch::failed(trace, RootStatus::IterationLimit)
}
