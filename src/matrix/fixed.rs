use core::ops::{Index, IndexMut};

use super::{MatrixError, MatrixView, MatrixViewMut};
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major `[[T; C]; R]`, stack-allocated.
///
/// ```
/// use numlab::StaticMatrix;
///
/// let a = StaticMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.view().row(1), &[3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticMatrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> StaticMatrix<T, R, C> {
    /// Create from a row-major 2D array.
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    #[inline]
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView::new(self.as_slice(), R, C, C)
    }

    #[inline]
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut::new(self.as_mut_slice(), R, C, C)
    }

    pub fn subview(&self, row: usize, col: usize, rows: usize, cols: usize) -> MatrixView<'_, T> {
        self.view().subview(row, col, rows, cols)
    }

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

impl<T: Scalar, const R: usize, const C: usize> StaticMatrix<T, R, C> {
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for StaticMatrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for StaticMatrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for StaticMatrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> MatrixRef<T> for StaticMatrix<T, R, C> {
    #[inline]
    fn nrows(&self) -> usize {
        R
    }

    #[inline]
    fn ncols(&self) -> usize {
        C
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> MatrixMut<T> for StaticMatrix<T, R, C> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row][col]
    }
}

// ── Bounded ─────────────────────────────────────────────────────────

/// Fixed `R x C` storage with a resizable active region in its top-left
/// corner.
///
/// Shrinking and re-growing the active region keeps the cells that were
/// outside it, the way an on-screen table keeps values in hidden columns.
///
/// ```
/// use numlab::BoundedMatrix;
///
/// let mut m: BoundedMatrix<f64, 4, 4> = BoundedMatrix::new(2, 2);
/// m[(1, 1)] = 5.0;
/// m.resize(1, 1).unwrap();
/// m.resize(2, 2).unwrap();
/// assert_eq!(m[(1, 1)], 5.0);
/// assert!(m.resize(5, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedMatrix<T, const R: usize, const C: usize> {
    storage: StaticMatrix<T, R, C>,
    nrows: usize,
    ncols: usize,
}

impl<T: Scalar, const R: usize, const C: usize> BoundedMatrix<T, R, C> {
    /// Zeroed storage with an `nrows x ncols` active region.
    ///
    /// Panics if the region exceeds the capacity.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        let mut m = Self {
            storage: StaticMatrix::zeros(),
            nrows: 0,
            ncols: 0,
        };
        if let Err(e) = m.resize(nrows, ncols) {
            panic!("{}", e);
        }
        m
    }
}

impl<T, const R: usize, const C: usize> BoundedMatrix<T, R, C> {
    /// Change the active region, leaving storage untouched.
    pub fn resize(&mut self, nrows: usize, ncols: usize) -> Result<(), MatrixError> {
        if nrows > R || ncols > C {
            return Err(MatrixError::OutOfBounds {
                row: 0,
                col: 0,
                rows: nrows,
                cols: ncols,
                nrows: R,
                ncols: C,
            });
        }
        self.nrows = nrows;
        self.ncols = ncols;
        Ok(())
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Capacity as `(rows, cols)`.
    #[inline]
    pub const fn capacity() -> (usize, usize) {
        (R, C)
    }

    /// The active region.
    #[inline]
    pub fn view(&self) -> MatrixView<'_, T> {
        self.storage.subview(0, 0, self.nrows, self.ncols)
    }

    #[inline]
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        let (rows, cols) = (self.nrows, self.ncols);
        self.storage.subview_mut(0, 0, rows, cols)
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for BoundedMatrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "({}, {}) outside active {}x{} region",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.storage[(row, col)]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for BoundedMatrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "({}, {}) outside active {}x{} region",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &mut self.storage[(row, col)]
    }
}

impl<T, const R: usize, const C: usize> MatrixRef<T> for BoundedMatrix<T, R, C> {
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
