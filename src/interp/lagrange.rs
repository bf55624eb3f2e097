use crate::point::Point;
use crate::traits::FloatScalar;

use super::InterpError;

/// Interpolating polynomial in Lagrange form.
///
/// Stores the nodes and evaluates
/// `L(x) = Σᵢ yᵢ Πⱼ≠ᵢ (x - xⱼ) / (xᵢ - xⱼ)` directly on every call.
/// Nodes need not be sorted or evenly spaced, only distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePolynomial<T> {
    points: Vec<Point<T>>,
}

impl<T: FloatScalar> LagrangePolynomial<T> {
    /// Construct from at least one point with pairwise distinct `x`.
    pub fn new(points: Vec<Point<T>>) -> Result<Self, InterpError> {
        if points.is_empty() {
            return Err(InterpError::TooFewPoints);
        }
        for (i, p) in points.iter().enumerate() {
            if points[i + 1..].iter().any(|q| q.x == p.x) {
                return Err(InterpError::DuplicateNodes);
            }
        }
        Ok(Self { points })
    }

    /// Construct from separate coordinate slices.
    pub fn from_xy(xs: &[T], ys: &[T]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        Self::new(xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Degree of the polynomial (number of nodes minus one).
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Evaluate the polynomial at `x`.
    pub fn eval(&self, x: T) -> T {
        let mut result = T::zero();
        for (i, pi) in self.points.iter().enumerate() {
            let mut term = pi.y;
            for (j, pj) in self.points.iter().enumerate() {
                if i != j {
                    term = term * (x - pj.x) / (pi.x - pj.x);
                }
            }
            result = result + term;
        }
        result
    }
}
