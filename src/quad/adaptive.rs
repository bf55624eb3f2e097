use log::{debug, trace, warn};

use crate::traits::FloatScalar;

use super::Method;

/// Settings for [`integrate`].
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveSettings<T> {
    /// Target for the Runge error estimate.
    pub precision: T,
    /// Subdivision count of the first estimate.
    pub min_subdivisions: usize,
    /// No doubling goes past this count.
    pub max_subdivisions: usize,
}

impl Default for AdaptiveSettings<f64> {
    fn default() -> Self {
        Self {
            precision: 1e-2,
            min_subdivisions: 2,
            max_subdivisions: 2 << 14,
        }
    }
}

impl Default for AdaptiveSettings<f32> {
    fn default() -> Self {
        Self {
            precision: 1e-2,
            min_subdivisions: 2,
            max_subdivisions: 2 << 14,
        }
    }
}

/// Result of an adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integral<T> {
    /// Estimate at the finest subdivision count reached.
    pub value: T,
    pub subdivisions: usize,
    /// Runge estimate of the error in `value`.
    pub error_estimate: T,
    /// The estimate fell below the precision.
    pub converged: bool,
    /// The estimate grew on two consecutive doublings.
    pub diverges: bool,
}

/// Integrate by doubling the subdivision count until
/// `|I(2n) - I(n)| / (2^p - 1) < precision`.
///
/// Stops early, unconverged, when the subdivision cap is hit or when the
/// error estimate grows on two consecutive doublings; the latter sets
/// [`Integral::diverges`].
///
/// Panics if `min_subdivisions == 0` or `precision <= 0`.
pub fn integrate<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    low: T,
    high: T,
    method: Method,
    settings: &AdaptiveSettings<T>,
) -> Integral<T> {
    assert!(settings.min_subdivisions > 0, "min_subdivisions must be positive");
    assert!(settings.precision > T::zero(), "precision must be positive");

    let factor = method.runge_factor::<T>();
    let mut n = settings.min_subdivisions;
    let mut value = method.apply(&mut f, low, high, n);
    let mut error_estimate = T::infinity();
    let mut growth = 0;

    while n * 2 <= settings.max_subdivisions {
        n *= 2;
        let next = method.apply(&mut f, low, high, n);
        let err = (next - value).abs() / factor;
        trace!("quad {:?}: n = {}, value = {:?}, err = {:?}", method, n, next, err);

        if err > error_estimate {
            growth += 1;
        } else {
            growth = 0;
        }
        value = next;
        error_estimate = err;

        if err < settings.precision {
            debug!("quad {:?}: converged at n = {}", method, n);
            return Integral {
                value,
                subdivisions: n,
                error_estimate,
                converged: true,
                diverges: false,
            };
        }
        if growth >= 2 {
            warn!("quad {:?}: error estimate growing at n = {}, giving up", method, n);
            return Integral {
                value,
                subdivisions: n,
                error_estimate,
                converged: false,
                diverges: true,
            };
        }
    }

    warn!(
        "quad {:?}: precision {:?} not reached within {} subdivisions",
        method, settings.precision, n
    );
    Integral {
        value,
        subdivisions: n,
        error_estimate,
        converged: false,
        diverges: false,
    }
}
