use crate::traits::FloatScalar;

use super::RectOffset;

/// Composite rectangle rule with `n` subintervals.
///
/// Panics if `n == 0`.
///
/// ```
/// use numlab::quad::{rectangle, RectOffset};
///
/// let left = rectangle(|x: f64| x, 0.0, 1.0, 4, RectOffset::Left);
/// let mid = rectangle(|x: f64| x, 0.0, 1.0, 4, RectOffset::Middle);
/// assert!((left - 0.375).abs() < 1e-15);
/// assert!((mid - 0.5).abs() < 1e-15);
/// ```
pub fn rectangle<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    low: T,
    high: T,
    n: usize,
    offset: RectOffset,
) -> T {
    assert!(n > 0, "rectangle rule needs at least one subdivision");
    let step = (high - low) / T::from(n).unwrap();
    let start = match offset {
        RectOffset::Left => low,
        RectOffset::Middle => low + step * T::from(0.5).unwrap(),
        RectOffset::Right => low + step,
    };

    let mut sum = T::zero();
    for i in 0..n {
        sum = sum + f(start + T::from(i).unwrap() * step);
    }
    sum * step
}

/// Composite trapezoid rule with `n` subintervals.
///
/// Panics if `n == 0`.
pub fn trapezoid<T: FloatScalar>(mut f: impl FnMut(T) -> T, low: T, high: T, n: usize) -> T {
    assert!(n > 0, "trapezoid rule needs at least one subdivision");
    let step = (high - low) / T::from(n).unwrap();
    let half = T::from(0.5).unwrap();

    let mut sum = (f(low) + f(high)) * half;
    for i in 1..n {
        sum = sum + f(low + T::from(i).unwrap() * step);
    }
    sum * step
}

/// Composite Simpson rule with `n` parabolic panels.
///
/// Each panel spans `(high - low) / n` and is sampled at both ends and the
/// midpoint, so `n` need not be even.
///
/// Panics if `n == 0`.
///
/// ```
/// use numlab::quad::simpson;
///
/// // exact for cubics, even with one panel
/// let v = simpson(|x: f64| x * x * x, 0.0, 2.0, 1);
/// assert!((v - 4.0).abs() < 1e-14);
/// ```
pub fn simpson<T: FloatScalar>(mut f: impl FnMut(T) -> T, low: T, high: T, n: usize) -> T {
    assert!(n > 0, "Simpson rule needs at least one panel");
    let step = (high - low) / T::from(n).unwrap();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();
    let six = T::from(6.0).unwrap();

    let mut ends = f(low) + f(high);
    let mut mids = T::zero();
    for i in 0..n {
        let x = low + T::from(i).unwrap() * step;
        mids = mids + f(x + half * step);
        if i > 0 {
            ends = ends + two * f(x);
        }
    }
    (ends + four * mids) * step / six
}
