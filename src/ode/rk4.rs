use crate::point::Point;
use crate::traits::FloatScalar;

/// Single step of the classic 4th-order Runge-Kutta method.
///
/// Advances `y` from `x` to `x + h` using `f(x, y) -> dy/dx`.
///
/// ```
/// use numlab::ode::rk4_step;
///
/// // dy/dx = -y (exponential decay)
/// let y1 = rk4_step(0.0, 1.0, 0.01, |_x, y: f64| -y);
/// assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk4_step<T: FloatScalar>(x: T, y: T, h: T, mut f: impl FnMut(T, T) -> T) -> T {
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();

    let k1 = h * f(x, y);
    let k2 = h * f(x + h * half, y + k1 * half);
    let k3 = h * f(x + h * half, y + k2 * half);
    let k4 = h * f(x + h, y + k3);

    y + (k1 + two * (k2 + k3) + k4) / six
}

/// Classic Runge-Kutta, `count` samples from `(low, y0)`.
///
/// Panics if `count == 0`.
///
/// ```
/// use numlab::ode::runge_kutta4;
///
/// // y' = xy, y(0) = 1  =>  y = exp(x²/2)
/// let pts = runge_kutta4(|x, y: f64| x * y, 0.0, 1.0, 0.01, 101);
/// let end = pts.last().unwrap();
/// assert!((end.x - 1.0).abs() < 1e-12);
/// assert!((end.y - 0.5_f64.exp()).abs() < 1e-9);
/// ```
pub fn runge_kutta4<T: FloatScalar>(
    mut f: impl FnMut(T, T) -> T,
    low: T,
    y0: T,
    step: T,
    count: usize,
) -> Vec<Point<T>> {
    assert!(count > 0, "need at least the initial point");
    let mut points = Vec::with_capacity(count);
    points.push(Point::new(low, y0));
    let mut y = y0;
    for i in 1..count {
        let x_prev = low + T::from(i - 1).unwrap() * step;
        y = rk4_step(x_prev, y, step, &mut f);
        points.push(Point::new(low + T::from(i).unwrap() * step, y));
    }
    points
}
