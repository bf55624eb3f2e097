use crate::matrix::{Matrix, MatrixView, MatrixViewMut};
use crate::traits::{MatrixRef, Scalar};

use super::Solvability;

/// Triangulate an augmented matrix, pivoting over variables (columns).
///
/// `src` holds `rows` equations over `cols - 1` variables plus a right-hand
/// side column. On return `dest` holds the triangulated system with its
/// variable columns reordered so the pivots sit on the main diagonal, and
/// `permute[slot]` names the original variable stored in column `slot`.
///
/// A pivot is any exactly nonzero coefficient; equations with no nonzero
/// coefficient among the remaining variables are skipped. `src` is copied
/// before elimination, so it is never modified.
///
/// Returns the number of permutation swaps performed, whose parity gives
/// the sign of the determinant.
///
/// ```
/// use numlab::gauss::triangulate;
/// use numlab::Matrix;
///
/// // 0x + y = 1
/// // 2x + y = 3
/// let src = Matrix::from_rows(2, 3, &[0.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
/// let mut dest = Matrix::zeros(2, 3);
/// let mut perm = [0; 2];
/// let swaps = triangulate(&mut dest.view_mut(), &src.view(), &mut perm);
///
/// assert_eq!(swaps, 1);
/// assert_eq!(perm, [1, 0]);
/// assert_eq!(dest.row(0), &[1.0, 0.0, 1.0]);
/// assert_eq!(dest.row(1), &[0.0, 2.0, 2.0]);
/// ```
pub fn triangulate<T: Scalar>(
    dest: &mut MatrixViewMut<'_, T>,
    src: &MatrixView<'_, T>,
    permute: &mut [usize],
) -> usize {
    let num_equations = src.nrows();
    let ncols = src.ncols();
    assert!(num_equations > 0, "augmented matrix has no equations");
    assert!(ncols > 1, "augmented matrix has no variables");
    assert_eq!(
        (dest.nrows(), dest.ncols()),
        (num_equations, ncols),
        "destination shape must match source"
    );
    let num_variables = ncols - 1;
    assert_eq!(
        permute.len(),
        num_variables,
        "permutation length must match variable count"
    );

    for (i, p) in permute.iter_mut().enumerate() {
        *p = i;
    }

    let mut tmp = Matrix::from_view(src);
    let mut swaps = 0;
    let mut var = 0;

    for equ in 0..num_equations {
        if var == num_variables {
            break;
        }

        let row = tmp.row(equ);
        let Some(found) = (var..num_variables).find(|&k| row[permute[k]] != T::zero()) else {
            continue;
        };
        if found != var {
            permute.swap(found, var);
            swaps += 1;
        }

        let pivot_col = permute[var];
        let (head, tail) = tmp.as_mut_slice().split_at_mut((equ + 1) * ncols);
        let pivot_row = &head[equ * ncols..];
        let pivot = pivot_row[pivot_col];

        for row in tail.chunks_exact_mut(ncols) {
            let factor = row[pivot_col] / pivot;
            for &col in &permute[var + 1..] {
                row[col] = row[col] - factor * pivot_row[col];
            }
            row[num_variables] = row[num_variables] - factor * pivot_row[num_variables];
            row[pivot_col] = T::zero();
        }

        var += 1;
    }

    for (dest_row, tmp_row) in dest.rows_mut().zip(tmp.rows()) {
        for (slot, &orig) in permute.iter().enumerate() {
            dest_row[slot] = tmp_row[orig];
        }
        dest_row[num_variables] = tmp_row[num_variables];
    }

    swaps
}

/// Triangulate an augmented matrix in place. See [`triangulate`].
pub fn triangulate_in_place<T: Scalar>(mat: &mut MatrixViewMut<'_, T>, permute: &mut [usize]) -> usize {
    let src = Matrix::from_view(&mat.as_view());
    triangulate(mat, &src.view(), permute)
}

/// Back-substitute a triangulated augmented matrix.
///
/// `raw_solution` receives the values in triangulated column order; map them
/// back through the permutation from [`triangulate`] to get the original
/// variable order. It is only fully written when the result is
/// [`Solvability::Determined`].
///
/// Surplus equations beyond the variable count are only checked for
/// consistency.
pub fn gather<T: Scalar>(raw_solution: &mut [T], mat: &MatrixView<'_, T>) -> Solvability {
    let num_equations = mat.nrows();
    assert!(num_equations > 0, "augmented matrix has no equations");
    assert!(mat.ncols() > 1, "augmented matrix has no variables");
    let num_variables = mat.ncols() - 1;
    assert_eq!(
        raw_solution.len(),
        num_variables,
        "solution length must match variable count"
    );

    for row in mat.rows() {
        let (coefs, rhs) = row.split_at(num_variables);
        if rhs[0] != T::zero() && coefs.iter().all(|&c| c == T::zero()) {
            return Solvability::Inconsistent;
        }
    }

    if num_equations < num_variables {
        return Solvability::Underdetermined {
            free: num_variables - num_equations,
        };
    }

    let square = mat.subview(0, 0, num_variables, mat.ncols());
    for i in (0..num_variables).rev() {
        let row = square.row(i);
        let diag = row[i];
        if diag == T::zero() {
            return Solvability::Underdetermined { free: 1 };
        }
        let mut acc = row[num_variables];
        for j in (i + 1)..num_variables {
            acc = acc - row[j] * raw_solution[j];
        }
        raw_solution[i] = acc / diag;
    }

    Solvability::Determined
}

/// Product of the main diagonal of a square matrix.
///
/// For a triangulated matrix this is the determinant up to the sign of the
/// column permutation.
pub fn triangular_determinant<T: Scalar>(mat: &MatrixView<'_, T>) -> T {
    assert_eq!(mat.nrows(), mat.ncols(), "determinant requires a square matrix");
    mat.rows()
        .enumerate()
        .fold(T::one(), |acc, (i, row)| acc * row[i])
}

/// Determinant of a square matrix by triangulation.
///
/// The sign is corrected by the parity of the column swaps.
///
/// ```
/// use numlab::gauss::determinant;
/// use numlab::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[0.0, 1.0, 1.0, 0.0]);
/// assert_eq!(determinant(&a.view()), -1.0);
/// ```
pub fn determinant<T: Scalar>(square: &MatrixView<'_, T>) -> T {
    let n = square.nrows();
    assert!(n > 0, "determinant of an empty matrix");
    assert_eq!(n, square.ncols(), "determinant requires a square matrix");

    let mut augmented = Matrix::zeros(n, n + 1);
    augmented.subview_mut(0, 0, n, n).copy_from(square);
    let mut permute = vec![0; n];
    let swaps = triangulate_in_place(&mut augmented.view_mut(), &mut permute);
    apply_swap_sign(triangular_determinant(&augmented.subview(0, 0, n, n)), swaps)
}

#[inline]
pub(crate) fn apply_swap_sign<T: Scalar>(det: T, swaps: usize) -> T {
    if swaps % 2 == 1 {
        T::zero() - det
    } else {
        det
    }
}

/// Dense matrix-vector product: `dest = mat * vec`.
pub fn mul_matrix_vector<T: Scalar>(dest: &mut [T], mat: &impl MatrixRef<T>, vec: &[T]) {
    assert_eq!(dest.len(), mat.nrows(), "output length must match row count");
    assert_eq!(vec.len(), mat.ncols(), "vector length must match column count");

    for (i, out) in dest.iter_mut().enumerate() {
        let mut sum = T::zero();
        for (j, &v) in vec.iter().enumerate() {
            sum = sum + *mat.get(i, j) * v;
        }
        *out = sum;
    }
}
