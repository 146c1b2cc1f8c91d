//! Borrowed dense matrix views
//!
//! These adapters give the extractor a two-dimensional view over storage
//! the caller already owns: a flat buffer in either memory order, a raw
//! byte buffer, or a slice of equally long rows. Construction validates
//! the extents once so that scanning never needs bounds checks of its own.

use core::marker::PhantomData;

use crate::validation::{validate_shape, validate_uniform_rows};
use crate::{CooError, DenseMatrix, MatrixElement, Result};

/// Memory order of a flat matrix buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Consecutive elements walk along a row (C order)
    #[default]
    RowMajor,
    /// Consecutive elements walk down a column (Fortran order)
    ColumnMajor,
}

/// Dense matrix view over a contiguous buffer
#[derive(Debug, Clone, Copy)]
pub struct DenseView<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    layout: Layout,
}

impl<'a, T: MatrixElement> DenseView<'a, T> {
    /// Create a view, validating that `data` holds exactly `nrows` × `ncols` elements
    pub fn new(data: &'a [T], nrows: usize, ncols: usize, layout: Layout) -> Result<Self> {
        validate_shape(data.len(), nrows, ncols)?;
        Ok(Self {
            data,
            nrows,
            ncols,
            layout,
        })
    }

    /// Create a row-major view
    pub fn row_major(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self> {
        Self::new(data, nrows, ncols, Layout::RowMajor)
    }

    /// Create a column-major view
    pub fn column_major(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self> {
        Self::new(data, nrows, ncols, Layout::ColumnMajor)
    }

    /// Reinterpret a raw byte buffer as a matrix of `T`
    ///
    /// The buffer must be aligned for `T` and its length a multiple of
    /// `size_of::<T>()`; otherwise `InvalidBuffer` is returned.
    pub fn from_bytes(bytes: &'a [u8], nrows: usize, ncols: usize, layout: Layout) -> Result<Self> {
        let data = bytemuck::try_cast_slice::<u8, T>(bytes).map_err(|_| CooError::InvalidBuffer)?;
        Self::new(data, nrows, ncols, layout)
    }

    /// Memory order of the underlying buffer
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The underlying buffer
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: MatrixElement> DenseMatrix for DenseView<'_, T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        match self.layout {
            Layout::RowMajor => self.data[row * self.ncols + col],
            Layout::ColumnMajor => self.data[col * self.nrows + row],
        }
    }
}

/// Dense matrix view over a slice of rows
///
/// Accepts anything that dereferences to a row slice, such as
/// `Vec<Vec<T>>` or `&[&[T]]`.
#[derive(Debug)]
pub struct RowSlices<'a, T, R> {
    rows: &'a [R],
    ncols: usize,
    _element: PhantomData<T>,
}

impl<'a, T, R> RowSlices<'a, T, R>
where
    T: MatrixElement,
    R: AsRef<[T]>,
{
    /// Create a view, rejecting ragged rows with `InvalidShape`
    pub fn new(rows: &'a [R]) -> Result<Self> {
        let ncols = validate_uniform_rows(rows.iter().map(|row| row.as_ref().len()))?;
        Ok(Self {
            rows,
            ncols,
            _element: PhantomData,
        })
    }
}

impl<T, R> DenseMatrix for RowSlices<'_, T, R>
where
    T: MatrixElement,
    R: AsRef<[T]>,
{
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.ncols)
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        self.rows[row].as_ref()[col]
    }
}

/// View an n-dimensional array as a matrix
///
/// Fails with `InvalidShape` unless the array has exactly two axes.
#[cfg(feature = "ndarray")]
pub fn as_matrix<A, S, D>(array: &ndarray::ArrayBase<S, D>) -> Result<ndarray::ArrayView2<'_, A>>
where
    S: ndarray::Data<Elem = A>,
    D: ndarray::Dimension,
{
    array
        .view()
        .into_dimensionality::<ndarray::Ix2>()
        .map_err(|_| CooError::InvalidShape)
}
