//! Row-major matrix storage and strided views.
//!
//! Every algorithm in the crate reads and writes through [`MatrixView`] /
//! [`MatrixViewMut`]: a borrowed rectangle with an explicit row stride, so a
//! sub-block of a larger matrix is addressed without copying. Three owners
//! hand out such views:
//!
//! - [`Matrix<T>`]: heap-allocated, runtime dimensions.
//! - [`StaticMatrix<T, R, C>`]: stack-allocated, const-generic dimensions.
//! - [`BoundedMatrix<T, R, C>`]: fixed `R x C` capacity with a resizable
//!   active region, used for user-editable input tables.

mod fixed;
mod view;


use core::ops::{Index, IndexMut};

pub use fixed::{BoundedMatrix, StaticMatrix};
pub use view::{MatrixView, MatrixViewMut, Rows, RowsMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Errors from fallible shape operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// The requested rectangle does not fit inside the parent.
    #[error("{rows}x{cols} block at ({row}, {col}) does not fit in a {nrows}x{ncols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Element count or extents disagree with the requested shape.
    #[error("expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}

/// Heap-allocated matrix with runtime dimensions.
///
/// Storage is row-major with no padding, so [`view`](Self::view) always
/// yields a contiguous view with `stride == ncols`.
///
/// ```
/// use numlab::Matrix;
///
/// let mut m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(m[(1, 2)], 6.0);
///
/// m.subview_mut(0, 1, 2, 2).fill(0.0);
/// assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 4.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// All-zeros matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Identity-like matrix: ones on the main diagonal.
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T: Copy> Matrix<T> {
    /// Build from a flat row-major slice.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_rows(nrows: usize, ncols: usize, data: &[T]) -> Self {
        match Self::try_from_rows(nrows, ncols, data) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible [`from_rows`](Self::from_rows).
    pub fn try_from_rows(nrows: usize, ncols: usize, data: &[T]) -> Result<Self, MatrixError> {
        if data.len() != nrows * ncols {
            return Err(MatrixError::DimensionMismatch {
                expected_rows: nrows,
                expected_cols: ncols,
                rows: data.len() / ncols.max(1),
                cols: ncols,
            });
        }
        Ok(Self {
            data: data.to_vec(),
            nrows,
            ncols,
        })
    }

    /// Copy the contents of any view into a new packed matrix.
    pub fn from_view(view: &MatrixView<'_, T>) -> Self {
        let data = match view.as_slice() {
            Some(flat) => flat.to_vec(),
            None => {
                let mut data = Vec::with_capacity(view.nrows() * view.ncols());
                for row in view.rows() {
                    data.extend_from_slice(row);
                }
                data
            }
        };
        Self {
            data,
            nrows: view.nrows(),
            ncols: view.ncols(),
        }
    }
}

impl<T> Matrix<T> {
    /// Build by calling `f(row, col)` for every element.
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView::new(&self.data, self.nrows, self.ncols, self.ncols)
    }

    #[inline]
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut::new(&mut self.data, self.nrows, self.ncols, self.ncols)
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {} out of bounds ({} rows)", i, self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.nrows, "row {} out of bounds ({} rows)", i, self.nrows);
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    #[inline]
    pub fn rows(&self) -> Rows<'_, T> {
        self.view().rows()
    }

    #[inline]
    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        let (nrows, ncols) = (self.nrows, self.ncols);
        MatrixViewMut::new(&mut self.data, nrows, ncols, ncols).into_rows_mut()
    }

    /// Borrow a `rows x cols` block starting at `(row, col)`.
    pub fn subview(&self, row: usize, col: usize, rows: usize, cols: usize) -> MatrixView<'_, T> {
        self.view().subview(row, col, rows, cols)
    }

    /// Mutably borrow a `rows x cols` block starting at `(row, col)`.
    pub fn subview_mut(
        &mut self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> MatrixViewMut<'_, T> {
        self.view_mut().into_subview(row, col, rows, cols)
    }
}

impl<'a, T: Copy> From<MatrixView<'a, T>> for Matrix<T> {
    fn from(view: MatrixView<'a, T>) -> Self {
        Self::from_view(&view)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.row(row)[col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.row_mut(row)[col]
    }
}

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self[(row, col)]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }
}
