use log::debug;

use crate::point::{Point, Segment};
use crate::traits::FloatScalar;

use super::{Root, RootSearch, RootSettings, RootStatus};

/// Method of chords (regula falsi) on the bracket `[low, high]`.
///
/// Each step intersects the chord through `(low, f(low))` and
/// `(high, f(high))` with the axis and replaces the endpoint whose value
/// has the same sign as the new point, so the bracket always keeps a sign
/// change. The trace holds the chord of every step.
///
/// Stops when `|f(mid)| < precision` or the bracket itself is narrower than
/// `precision`. Same-sign endpoints end the search immediately with
/// [`RootStatus::NotBracketed`].
///
/// Panics if `high <= low` or `precision <= 0`.
///
/// # Example
///
/// ```
/// use numlab::roots::{chords, RootSettings};
///
/// let s = chords(|x: f64| x * x - 0.9, 0.1, 1.0, &RootSettings::default());
/// let r = s.root.unwrap();
/// assert!(r.fx.abs() < 1e-3);
/// assert!((r.x - 0.9_f64.sqrt()).abs() < 1e-3);
/// assert!(!s.trace.is_empty());
/// ```
pub fn chords<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    low: T,
    high: T,
    settings: &RootSettings<T>,
) -> RootSearch<T, Segment<T>> {
    assert!(high > low, "chords requires low < high");
    assert!(settings.precision > T::zero(), "precision must be positive");

    let (mut low, mut high) = (low, high);
    let mut f_low = f(low);
    let mut f_high = f(high);
    let mut trace = Vec::new();

    if (f_low >= T::zero()) == (f_high >= T::zero()) {
        debug!("chords: no sign change on [{:?}, {:?}]", low, high);
        return RootSearch::failed(trace, RootStatus::NotBracketed);
    }

    for iter in 0..settings.max_iter {
        let mid = low + f_low * (high - low) / (f_low - f_high);
        let f_mid = f(mid);
        trace.push(Segment::new(Point::new(low, f_low), Point::new(high, f_high)));

        if f_mid.abs() < settings.precision || high - low < settings.precision {
            debug!("chords: root {:?} after {} iterations", mid, iter + 1);
            return RootSearch::converged(
                trace,
                Root {
                    x: mid,
                    fx: f_mid,
                    iterations: iter + 1,
                },
            );
        }

        if (f_mid > T::zero()) == (f_high > T::zero()) {
            high = mid;
            f_high = f_mid;
        } else {
            low = mid;
            f_low = f_mid;
        }
    }

    debug!("chords: no root within {} iterations", settings.max_iter);
    RootSearch::failed(trace, RootStatus::IterationLimit)
}
