use crate::point::Point;
use crate::traits::FloatScalar;

/// One modified Euler (Heun) step from `(x, y)` to `x + h`.
///
/// Predicts `ỹ = y + h f(x, y)`, then averages the slopes at both ends.
pub fn euler_modified_step<T: FloatScalar>(x: T, y: T, h: T, mut f: impl FnMut(T, T) -> T) -> T {
    let half = T::from(0.5).unwrap();
    let slope = f(x, y);
    let predicted = y + h * slope;
    y + half * h * (slope + f(x + h, predicted))
}

/// Modified Euler method, `count` samples from `(low, y0)`.
///
/// Panics if `count == 0`.
pub fn euler_modified<T: FloatScalar>(
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
        y = euler_modified_step(x_prev, y, step, &mut f);
        points.push(Point::new(low + T::from(i).unwrap() * step, y));
    }
    points
}
