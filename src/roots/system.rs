use log::debug;

use crate::point::Point;
use crate::traits::FloatScalar;

use super::{RootSettings, RootStatus};

/// Result of a 2x2 Newton search.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSearch<T> {
    /// Every guess, starting with the initial one.
    pub trace: Vec<Point<T>>,
    /// Present exactly when `status` is [`RootStatus::Converged`].
    pub root: Option<Point<T>>,
    pub iterations: usize,
    pub status: RootStatus,
}

impl<T> SystemSearch<T> {
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status == RootStatus::Converged
    }
}

/// Newton's method for two equations `F(x, y) = 0` in two unknowns.
///
/// `eval` returns `[F1, F2]` at a point and `jacobian` returns
/// `[[∂F1/∂x, ∂F1/∂y], [∂F2/∂x, ∂F2/∂y]]`. The Newton step `J Δ = -F` is
/// solved in closed form. Converges when `|Δ|² < precision²`; a singular
/// Jacobian ends the search with [`RootStatus::ZeroDerivative`].
///
/// # Example
///
/// ```
/// use numlab::point::Point;
/// use numlab::roots::{newton_system, RootSettings};
///
/// // circle of radius 2 meets the line y = x
/// let s = newton_system(
///     |p: Point<f64>| [p.x * p.x + p.y * p.y - 4.0, p.x - p.y],
///     |p: Point<f64>| [[2.0 * p.x, 2.0 * p.y], [1.0, -1.0]],
///     Point::new(1.0, 1.0),
///     &RootSettings { precision: 1e-10, max_iter: 200 },
/// );
/// let r = s.root.unwrap();
/// assert!((r.x - 2.0_f64.sqrt()).abs() < 1e-10);
/// assert!((r.y - 2.0_f64.sqrt()).abs() < 1e-10);
/// ```
pub fn newton_system<T: FloatScalar>(
    mut eval: impl FnMut(Point<T>) -> [T; 2],
    mut jacobian: impl FnMut(Point<T>) -> [[T; 2]; 2],
    guess: Point<T>,
    settings: &RootSettings<T>,
) -> SystemSearch<T> {
    let mut p = guess;
    let mut trace = Vec::new();
    let tol_sq = settings.precision * settings.precision;

    for iter in 0..settings.max_iter {
        trace.push(p);

        let [f1, f2] = eval(p);
        let [[a, b], [c, d]] = jacobian(p);
        let det = a * d - b * c;
        if det == T::zero() {
            debug!("newton system: singular jacobian at {:?}", p);
            return SystemSearch {
                trace,
                root: None,
                iterations: iter,
                status: RootStatus::ZeroDerivative,
            };
        }

        let step = Point::new((b * f2 - d * f1) / det, (c * f1 - a * f2) / det);
        p = p + step;

        if !(p.x.is_finite() && p.y.is_finite()) {
            trace.push(p);
            return SystemSearch {
                trace,
                root: None,
                iterations: iter + 1,
                status: RootStatus::Diverged,
            };
        }

        if step.norm_squared() < tol_sq {
            trace.push(p);
            debug!("newton system: root {:?} after {} steps", p, iter + 1);
            return SystemSearch {
                trace,
                root: Some(p),
                iterations: iter + 1,
                status: RootStatus::Converged,
            };
        }
    }

    debug!("newton system: no root within {} steps", settings.max_iter);
    SystemSearch {
        trace,
        root: None,
        iterations: settings.max_iter,
        status: RootStatus::IterationLimit,
    }
}

/// Intersection of the curves `y = f(x)` and `y = g(x)` by [`newton_system`].
///
/// # Example
///
/// ```
/// use numlab::point::Point;
/// use numlab::roots::{intersect_curves, RootSettings};
///
/// // y = x² and y = 2 - x meet at (1, 1)
/// let s = intersect_curves(
///     |x: f64| x * x, |x| 2.0 * x,
///     |x| 2.0 - x, |_| -1.0,
///     Point::new(2.0, 0.0),
///     &RootSettings { precision: 1e-9, max_iter: 200 },
/// );
/// let r = s.root.unwrap();
/// assert!((r.x - 1.0).abs() < 1e-9 && (r.y - 1.0).abs() < 1e-9);
/// ```
pub fn intersect_curves<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    mut g: impl FnMut(T) -> T,
    mut dg: impl FnMut(T) -> T,
    guess: Point<T>,
    settings: &RootSettings<T>,
) -> SystemSearch<T> {
    let minus_one = -T::one();
    newton_system(
        |p| [f(p.x) - p.y, g(p.x) - p.y],
        |p| [[df(p.x), minus_one], [dg(p.x), minus_one]],
        guess,
        settings,
    )
}
