//! Gaussian elimination with variable (column) pivoting.
//!
//! Pivoting swaps variables rather than equations, so each row of the
//! triangulated system is still the original equation it started as. The
//! column order is tracked in an explicit permutation array, and the
//! solution is scattered back through it at the end.
//!
//! Low-level routines operate on [`MatrixView`](crate::matrix::MatrixView)s;
//! [`solve_system`] runs the whole pipeline and collects a [`GaussOutput`].
//! [`LinearSystem`] is the bounded, user-editable augmented matrix.
//!
//! # Example
//!
//! ```
//! use numlab::gauss::{solve_system, Solvability};
//! use numlab::Matrix;
//!
//! //  x + 2y = 5
//! // 3x + 4y = 11
//! let a = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 5.0, 3.0, 4.0, 11.0]);
//! let out = solve_system(&a.view());
//!
//! assert_eq!(out.solvability, Solvability::Determined);
//! let x = out.solution.unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 2.0).abs() < 1e-12);
//! assert!((out.determinant.unwrap() + 2.0).abs() < 1e-12);
//! ```

mod eliminate;
mod system;


pub use eliminate::{
    determinant, gather, mul_matrix_vector, triangular_determinant, triangulate,
    triangulate_in_place,
};
pub use system::{solve_system, GaussOutput, LinearSystem, LinearSystemError, MAX_COLS, MAX_ROWS};

/// Outcome of back-substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solvability {
    /// A unique solution was found.
    Determined,
    /// At least `free` variables are left undetermined. The count is a
    /// lower bound, free variables are not identified.
    Underdetermined { free: usize },
    /// Some equation reads `0 = b` with `b != 0`.
    Inconsistent,
}

impl Solvability {
    /// Integer code: `0` determined, `-1` inconsistent, otherwise the
    /// free-variable lower bound.
    pub fn code(self) -> isize {
        match self {
            Solvability::Determined => 0,
            Solvability::Underdetermined { free } => free as isize,
            Solvability::Inconsistent => -1,
        }
    }

    #[inline]
    pub fn is_determined(self) -> bool {
        self == Solvability::Determined
    }
}
