use log::debug;

use crate::matrix::{BoundedMatrix, Matrix, MatrixView};
use crate::traits::Scalar;

use super::eliminate::{apply_swap_sign, gather, mul_matrix_vector, triangular_determinant, triangulate};
use super::Solvability;

/// Maximum number of equations in a [`LinearSystem`].
pub const MAX_ROWS: usize = 20;
/// Maximum number of columns (variables plus right-hand side) in a [`LinearSystem`].
pub const MAX_COLS: usize = 20;

/// Errors from shaping a [`LinearSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LinearSystemError {
    #[error("a {rows}x{cols} system is outside 1..=20 rows and 2..=20 columns")]
    BadDimensions { rows: usize, cols: usize },
    #[error("expected {expected} coefficients, got {got}")]
    DataLength { expected: usize, got: usize },
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), LinearSystemError> {
    if (1..=MAX_ROWS).contains(&rows) && (2..=MAX_COLS).contains(&cols) {
        Ok(())
    } else {
        Err(LinearSystemError::BadDimensions { rows, cols })
    }
}

/// Everything one elimination run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussOutput<T> {
    /// Triangulated augmented matrix, columns in permuted order.
    pub triangulated: Matrix<T>,
    /// `permutation[slot]` is the original variable in column `slot`.
    pub permutation: Vec<usize>,
    /// Number of variable swaps.
    pub swaps: usize,
    pub solvability: Solvability,
    /// Signed determinant, present for square coefficient matrices.
    pub determinant: Option<T>,
    /// Solution in original variable order, present when determined.
    pub solution: Option<Vec<T>>,
    /// `A * x - b` against the input system, present when determined.
    pub mismatch: Option<Vec<T>>,
}

impl<T> GaussOutput<T> {
    #[inline]
    pub fn equations(&self) -> usize {
        self.triangulated.nrows()
    }

    #[inline]
    pub fn variables(&self) -> usize {
        self.permutation.len()
    }
}

/// Triangulate, back-substitute and check an augmented matrix.
pub fn solve_system<T: Scalar>(augmented: &MatrixView<'_, T>) -> GaussOutput<T> {
    let rows = augmented.nrows();
    let cols = augmented.ncols();
    assert!(rows > 0 && cols > 1, "augmented matrix needs equations and variables");
    let vars = cols - 1;

    let mut triangulated = Matrix::zeros(rows, cols);
    let mut permutation = vec![0; vars];
    let swaps = triangulate(&mut triangulated.view_mut(), augmented, &mut permutation);

    let mut raw = vec![T::zero(); vars];
    let solvability = gather(&mut raw, &triangulated.view());
    debug!(
        "eliminated {}x{} system: {} swaps, {:?}",
        rows, vars, swaps, solvability
    );

    let determinant = (rows == vars).then(|| {
        apply_swap_sign(
            triangular_determinant(&triangulated.subview(0, 0, rows, vars)),
            swaps,
        )
    });

    let (solution, mismatch) = if solvability.is_determined() {
        let mut solution = vec![T::zero(); vars];
        for (slot, &var) in permutation.iter().enumerate() {
            solution[var] = raw[slot];
        }
        let mut mismatch = vec![T::zero(); rows];
        mul_matrix_vector(&mut mismatch, &augmented.subview(0, 0, rows, vars), &solution);
        for (m, row) in mismatch.iter_mut().zip(augmented.rows()) {
            *m = *m - row[vars];
        }
        (Some(solution), Some(mismatch))
    } else {
        (None, None)
    };

    GaussOutput {
        triangulated,
        permutation,
        swaps,
        solvability,
        determinant,
        solution,
        mismatch,
    }
}

/// User-editable augmented matrix with bounded dimensions.
///
/// Storage is a fixed [`MAX_ROWS`] x [`MAX_COLS`] block; resizing only moves
/// the active extents, so coefficients in hidden cells come back when the
/// system grows again.
///
/// ```
/// use numlab::gauss::LinearSystem;
///
/// let mut sys = LinearSystem::new(2, 3).unwrap();
/// sys.set(0, 0, 1.0);
/// sys.set(0, 2, 2.0);
/// sys.set(1, 1, 1.0);
/// sys.set(1, 2, 3.0);
/// assert_eq!(sys.variables(), 2);
///
/// let out = sys.solve();
/// assert_eq!(out.solution.unwrap(), vec![2.0, 3.0]);
/// assert!(sys.resize(21, 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: BoundedMatrix<f64, MAX_ROWS, MAX_COLS>,
}

impl LinearSystem {
    /// Zero system of `rows` equations and `cols - 1` variables.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LinearSystemError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            matrix: BoundedMatrix::new(rows, cols),
        })
    }

    /// System from row-major augmented coefficients.
    pub fn from_rows(rows: usize, cols: usize, data: &[f64]) -> Result<Self, LinearSystemError> {
        let mut sys = Self::new(rows, cols)?;
        if data.len() != rows * cols {
            return Err(LinearSystemError::DataLength {
                expected: rows * cols,
                got: data.len(),
            });
        }
        let src = MatrixView::new(data, rows, cols, cols);
        sys.matrix.view_mut().copy_from(&src);
        Ok(sys)
    }

    /// Change the active extents. Fails without modifying `self` when
    /// outside the bounds.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), LinearSystemError> {
        check_dimensions(rows, cols)?;
        self.matrix
            .resize(rows, cols)
            .map_err(|_| LinearSystemError::BadDimensions { rows, cols })
    }

    #[inline]
    pub fn equations(&self) -> usize {
        self.matrix.nrows()
    }

    #[inline]
    pub fn variables(&self) -> usize {
        self.matrix.ncols() - 1
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.matrix[(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.matrix[(row, col)] = value;
    }

    /// Right-hand side of equation `row`.
    #[inline]
    pub fn rhs(&self, row: usize) -> f64 {
        self.matrix[(row, self.variables())]
    }

    /// The active augmented matrix.
    #[inline]
    pub fn view(&self) -> MatrixView<'_, f64> {
        self.matrix.view()
    }

    /// Nonzero `(variable, coefficient)` terms of equation `row`, for display.
    pub fn equation_terms(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let vars = self.variables();
        self.view().row(row)[..vars]
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, c)| c != 0.0)
    }

    pub fn solve(&self) -> GaussOutput<f64> {
        solve_system(&self.view())
    }
}

impl Default for LinearSystem {
    /// Four equations over three variables.
    fn default() -> Self {
        Self {
            matrix: BoundedMatrix::new(4, 4),
        }
    }
}
