use core::ops::{Index, IndexMut};

use super::MatrixError;
use crate::traits::{MatrixMut, MatrixRef};

/// Number of backing elements a `nrows x ncols` rectangle with the given
/// stride spans, counting from its first element.
#[inline]
pub(crate) fn spanned_len(nrows: usize, ncols: usize, stride: usize) -> usize {
    if nrows == 0 || ncols == 0 {
        0
    } else {
        (nrows - 1) * stride + ncols
    }
}

fn check_rect(
    nrows: usize,
    ncols: usize,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), MatrixError> {
    let fits = row
        .checked_add(rows)
        .is_some_and(|end| end <= nrows)
        && col.checked_add(cols).is_some_and(|end| end <= ncols);
    if fits {
        Ok(())
    } else {
        Err(MatrixError::OutOfBounds {
            row,
            col,
            rows,
            cols,
            nrows,
            ncols,
        })
    }
}

/// Offset and length of a sub-rectangle inside a backing slice.
#[inline]
fn sub_range(stride: usize, row: usize, col: usize, rows: usize, cols: usize) -> (usize, usize) {
    let len = spanned_len(rows, cols, stride);
    if len == 0 {
        (0, 0)
    } else {
        (row * stride + col, len)
    }
}

// ── Immutable view ──────────────────────────────────────────────────

/// Non-owning row-major view of a rectangle inside a larger buffer.
///
/// Row `i` starts `i * stride` elements after the first element, so a view
/// can address a sub-rectangle of a bigger backing store without copying.
///
/// ```
/// use numlab::matrix::MatrixView;
///
/// // 3x3 backing store, view the bottom-right 2x2 block
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
/// let full = MatrixView::new(&data, 3, 3, 3);
/// let block = full.subview(1, 1, 2, 2);
/// assert_eq!(block.row(0), &[5.0, 6.0]);
/// assert_eq!(block[(1, 1)], 9.0);
/// assert_eq!(block.stride(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    stride: usize,
}

impl<'a, T> MatrixView<'a, T> {
    /// Create a view over `data`, whose first element is `(0, 0)`.
    ///
    /// Panics if `stride < ncols` or if `data` is too short to hold the
    /// last row.
    pub fn new(data: &'a [T], nrows: usize, ncols: usize, stride: usize) -> Self {
        assert!(
            stride >= ncols,
            "stride {} is smaller than column count {}",
            stride,
            ncols
        );
        let needed = spanned_len(nrows, ncols, stride);
        assert!(
            data.len() >= needed,
            "buffer of {} elements cannot hold a {}x{} view with stride {}",
            data.len(),
            nrows,
            ncols,
            stride
        );
        Self {
            data: &data[..needed],
            nrows,
            ncols,
            stride,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Distance in elements between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whether the rows are packed back to back with no gap.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.ncols || self.nrows <= 1
    }

    /// The viewed elements as one flat row-major slice, if contiguous.
    #[inline]
    pub fn as_slice(&self) -> Option<&'a [T]> {
        self.is_contiguous().then_some(self.data)
    }

    /// Row `i` as a slice of exactly `ncols` elements.
    ///
    /// Panics if `i >= nrows`.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [T] {
        assert!(i < self.nrows, "row {} out of bounds ({} rows)", i, self.nrows);
        let start = i * self.stride;
        &self.data[start..start + self.ncols]
    }

    /// Element `(row, col)`, or `None` when outside the view.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row < self.nrows && col < self.ncols {
            Some(&self.data[row * self.stride + col])
        } else {
            None
        }
    }

    /// Iterate over rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> Rows<'a, T> {
        Rows {
            data: self.data,
            remaining: self.nrows,
            ncols: self.ncols,
            stride: self.stride,
        }
    }

    /// Extract a `rows x cols` rectangle starting at `(row, col)`.
    ///
    /// Panics if the rectangle does not fit. See [`try_subview`](Self::try_subview).
    pub fn subview(&self, row: usize, col: usize, rows: usize, cols: usize) -> MatrixView<'a, T> {
        match self.try_subview(row, col, rows, cols) {
            Ok(view) => view,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible [`subview`](Self::subview).
    pub fn try_subview(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixView<'a, T>, MatrixError> {
        check_rect(self.nrows, self.ncols, row, col, rows, cols)?;
        let (start, len) = sub_range(self.stride, row, col, rows, cols);
        Ok(MatrixView {
            data: &self.data[start..start + len],
            nrows: rows,
            ncols: cols,
            stride: self.stride,
        })
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.row(row)[col]
    }
}

impl<T> MatrixRef<T> for MatrixView<'_, T> {
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
        &self.row(row)[col]
    }
}

impl<'a, T> IntoIterator for MatrixView<'a, T> {
    type Item = &'a [T];
    type IntoIter = Rows<'a, T>;

    #[inline]
    fn into_iter(self) -> Rows<'a, T> {
        self.rows()
    }
}

// ── Mutable view ────────────────────────────────────────────────────

/// Non-owning mutable row-major view with an explicit stride.
///
/// The borrow checker guarantees a mutable view never aliases another
/// live view of the same elements.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    stride: usize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Create a mutable view over `data`, whose first element is `(0, 0)`.
    ///
    /// Panics under the same conditions as [`MatrixView::new`].
    pub fn new(data: &'a mut [T], nrows: usize, ncols: usize, stride: usize) -> Self {
        assert!(
            stride >= ncols,
            "stride {} is smaller than column count {}",
            stride,
            ncols
        );
        let needed = spanned_len(nrows, ncols, stride);
        assert!(
            data.len() >= needed,
            "buffer of {} elements cannot hold a {}x{} view with stride {}",
            data.len(),
            nrows,
            ncols,
            stride
        );
        Self {
            data: &mut data[..needed],
            nrows,
            ncols,
            stride,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Reborrow as an immutable view.
    #[inline]
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &*self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            stride: self.stride,
        }
    }

    /// Reborrow with a shorter lifetime.
    #[inline]
    pub fn reborrow(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut {
            data: &mut *self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            stride: self.stride,
        }
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {} out of bounds ({} rows)", i, self.nrows);
        let start = i * self.stride;
        &self.data[start..start + self.ncols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.nrows, "row {} out of bounds ({} rows)", i, self.nrows);
        let start = i * self.stride;
        &mut self.data[start..start + self.ncols]
    }

    #[inline]
    pub fn rows(&self) -> Rows<'_, T> {
        self.as_view().rows()
    }

    #[inline]
    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        self.reborrow().into_rows_mut()
    }

    /// Consume the view into an iterator over mutable rows.
    #[inline]
    pub fn into_rows_mut(self) -> RowsMut<'a, T> {
        RowsMut {
            data: self.data,
            remaining: self.nrows,
            ncols: self.ncols,
            stride: self.stride,
        }
    }

    /// Mutable `rows x cols` rectangle starting at `(row, col)`.
    ///
    /// Panics if the rectangle does not fit.
    pub fn subview_mut(
        &mut self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> MatrixViewMut<'_, T> {
        self.reborrow().into_subview(row, col, rows, cols)
    }

    /// Consume the view, narrowing it to a sub-rectangle.
    pub fn into_subview(self, row: usize, col: usize, rows: usize, cols: usize) -> MatrixViewMut<'a, T> {
        if let Err(e) = check_rect(self.nrows, self.ncols, row, col, rows, cols) {
            panic!("{}", e);
        }
        let (start, len) = sub_range(self.stride, row, col, rows, cols);
        MatrixViewMut {
            data: &mut self.data[start..start + len],
            nrows: rows,
            ncols: cols,
            stride: self.stride,
        }
    }
}

impl<T: Copy> MatrixViewMut<'_, T> {
    /// Copy every element of `src` into this view.
    ///
    /// Panics if the dimensions differ.
    pub fn copy_from(&mut self, src: &MatrixView<'_, T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (src.nrows(), src.ncols()),
            "copy_from dimension mismatch"
        );
        for (dst, src) in self.rows_mut().zip(src.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        for row in self.rows_mut() {
            row.fill(value);
        }
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.row(row)[col]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.row_mut(row)[col]
    }
}

impl<T> MatrixRef<T> for MatrixViewMut<'_, T> {
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
        &self.row(row)[col]
    }
}

impl<T> MatrixMut<T> for MatrixViewMut<'_, T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.row_mut(row)[col]
    }
}

// ── Row iterators ───────────────────────────────────────────────────

/// Iterator over the rows of a [`MatrixView`].
#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    data: &'a [T],
    remaining: usize,
    ncols: usize,
    stride: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.remaining == 0 {
            return None;
        }
        let row = &self.data[..self.ncols];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.data = self.data.get(self.stride..).unwrap_or(&[]);
        }
        Some(row)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let start = self.remaining * self.stride;
        Some(&self.data[start..start + self.ncols])
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}

/// Iterator over the rows of a [`MatrixViewMut`].
#[derive(Debug)]
pub struct RowsMut<'a, T> {
    data: &'a mut [T],
    remaining: usize,
    ncols: usize,
    stride: usize,
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<&'a mut [T]> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let data = core::mem::take(&mut self.data);
        if self.remaining == 0 {
            return Some(&mut data[..self.ncols]);
        }
        let (head, tail) = data.split_at_mut(self.stride.min(data.len()));
        self.data = tail;
        Some(&mut head[..self.ncols])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RowsMut<'_, T> {}
