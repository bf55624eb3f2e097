use log::debug;

use crate::traits::FloatScalar;

use super::{Root, RootSearch, RootSettings, RootStatus};

/// Relaxation factor `λ` for [`fixed_point`], kept together with `1/λ`.
///
/// Either side can be edited and the other follows.
///
/// ```
/// use numlab::roots::Relaxation;
///
/// let mut r = Relaxation::new(-0.5);
/// assert_eq!(r.inverse(), -2.0);
/// r.set_inverse(4.0);
/// assert_eq!(r.lambda(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relaxation<T> {
    lambda: T,
    inverse: T,
}

impl<T: FloatScalar> Relaxation<T> {
    /// Panics if `lambda` is zero.
    pub fn new(lambda: T) -> Self {
        assert!(lambda != T::zero(), "relaxation factor must be nonzero");
        Self {
            lambda,
            inverse: lambda.recip(),
        }
    }

    #[inline]
    pub fn lambda(&self) -> T {
        self.lambda
    }

    #[inline]
    pub fn inverse(&self) -> T {
        self.inverse
    }

    /// Panics if `lambda` is zero.
    pub fn set_lambda(&mut self, lambda: T) {
        *self = Self::new(lambda);
    }

    /// Panics if `inverse` is zero.
    pub fn set_inverse(&mut self, inverse: T) {
        assert!(inverse != T::zero(), "relaxation factor must be nonzero");
        self.inverse = inverse;
        self.lambda = inverse.recip();
    }
}

impl<T: FloatScalar> Default for Relaxation<T> {
    fn default() -> Self {
        Self::new(T::one())
    }
}

/// Relaxed fixed-point iteration `x <- x + λ f(x)`.
///
/// Converges when successive iterates differ by less than `precision` or
/// `|f(x)| < precision`. The iteration only contracts when
/// `-2 < λ f'(x) < 0` near the root, which is what `λ` is for. Every
/// iterate, including `guess`, is recorded in the trace.
///
/// # Example
///
/// ```
/// use numlab::roots::{fixed_point, Relaxation, RootSettings};
///
/// let settings = RootSettings::default().with_max_iter(200);
/// let s = fixed_point(|x: f64| x * x - 0.9, 0.5, Relaxation::new(-0.5), &settings);
/// assert!(s.is_converged());
/// assert!((s.root.unwrap().x - 0.9_f64.sqrt()).abs() < 1e-2);
/// ```
pub fn fixed_point<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    guess: T,
    relaxation: Relaxation<T>,
    settings: &RootSettings<T>,
) -> RootSearch<T, T> {
    let lambda = relaxation.lambda();
    let two = T::from(2.0).unwrap();
    let mut last = guess + two * settings.precision;
    let mut x = guess;
    let mut trace = Vec::new();

    for iter in 0..settings.max_iter {
        trace.push(x);
        if !x.is_finite() {
            debug!("fixed point: iterate diverged after {} steps", iter);
            return RootSearch::failed(trace, RootStatus::Diverged);
        }

        let fx = f(x);
        if (last - x).abs() < settings.precision || fx.abs() < settings.precision {
            debug!("fixed point: root {:?} after {} steps", x, iter);
            return RootSearch::converged(
                trace,
                Root {
                    x,
                    fx,
                    iterations: iter,
                },
            );
        }

        last = x;
        x = x + lambda * fx;
    }

    debug!("fixed point: no root within {} steps", settings.max_iter);
    RootSearch::failed(trace, RootStatus::IterationLimit)
}
