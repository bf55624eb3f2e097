//! Plain `(x, y)` sample type shared by traces, point sets and trajectories.

use crate::traits::FloatScalar;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: FloatScalar> Point<T> {
    /// Squared Euclidean length.
    #[inline]
    pub fn norm_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }
}

impl<T: FloatScalar> core::ops::Add for Point<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: FloatScalar> core::ops::Sub for Point<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// A line segment, used for chord and tangent traces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T> {
    pub a: Point<T>,
    pub b: Point<T>,
}

impl<T> Segment<T> {
    #[inline]
    pub const fn new(a: Point<T>, b: Point<T>) -> Self {
        Self { a, b }
    }
}

/// Sort points by `x` and drop exact duplicates.
///
/// NaN coordinates sort last.
///
/// ```
/// use numlab::point::{normalize_points, Point};
///
/// let mut pts = vec![Point::new(2.0, 1.0), Point::new(1.0, 0.0), Point::new(2.0, 1.0)];
/// normalize_points(&mut pts);
/// assert_eq!(pts, vec![Point::new(1.0, 0.0), Point::new(2.0, 1.0)]);
/// ```
pub fn normalize_points<T: FloatScalar>(points: &mut Vec<Point<T>>) {
    points.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or_else(|| a.x.is_nan().cmp(&b.x.is_nan()))
    });
    points.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_distinct_y() {
        let mut pts = vec![
            Point::new(3.0_f64, 0.0),
            Point::new(1.0, 5.0),
            Point::new(1.0, 4.0),
        ];
        normalize_points(&mut pts);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0].x, 1.0);
        assert_eq!(pts[2].x, 3.0);
    }

    #[test]
    fn point_arithmetic() {
        let d = Point::new(3.0_f64, 4.0) - Point::new(0.0, 0.0);
        assert_eq!(d.norm_squared(), 25.0);
        assert_eq!(Point::new(1.0, 2.0) + Point::new(1.0, 1.0), Point::new(2.0, 3.0));
    }
}
