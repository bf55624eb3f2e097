use crate::gauss::determinant;
use crate::matrix::Matrix;
use crate::point::Point;
use crate::traits::FloatScalar;

use super::FitError;

/// Least-squares polynomial of the given degree, coefficients ascending.
///
/// Builds the normal equations from the power sums `Σxᵏ` (k ≤ 2·degree) and
/// `Σxᵏy` (k ≤ degree) in one pass over `points`, then solves them by
/// Cramer's rule. An exactly zero main determinant is reported as
/// [`FitError::Degenerate`].
///
/// Panics if `points` is empty.
///
/// ```
/// use numlab::fit::polynomial_fit;
/// use numlab::point::Point;
///
/// let pts = [(0.0_f64, 1.0), (1.0, 3.0), (2.0, 5.0)].map(Point::from);
/// let c = polynomial_fit(pts, 1).unwrap();
/// assert!((c[0] - 1.0).abs() < 1e-12 && (c[1] - 2.0).abs() < 1e-12);
/// ```
pub fn polynomial_fit<T: FloatScalar>(
    points: impl IntoIterator<Item = Point<T>>,
    degree: usize,
) -> Result<Vec<T>, FitError> {
    let size = degree + 1;
    let mut power_sums = vec![T::zero(); 2 * degree + 1];
    let mut moment_sums = vec![T::zero(); size];
    let mut count = 0usize;

    for p in points {
        count += 1;
        let mut xk = T::one();
        for (k, s) in power_sums.iter_mut().enumerate() {
            *s = *s + xk;
            if k < size {
                moment_sums[k] = moment_sums[k] + xk * p.y;
            }
            xk = xk * p.x;
        }
    }
    assert!(count > 0, "cannot fit an empty point set");

    let normal = Matrix::from_fn(size, size, |i, j| power_sums[i + j]);
    let main = determinant(&normal.view());
    if main == T::zero() {
        return Err(FitError::Degenerate);
    }

    let coefficients = (0..size)
        .map(|k| {
            let mut replaced = normal.clone();
            for (i, &m) in moment_sums.iter().enumerate() {
                replaced[(i, k)] = m;
            }
            determinant(&replaced.view()) / main
        })
        .collect();
    Ok(coefficients)
}
