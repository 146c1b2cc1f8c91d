//! Dense matrix abstraction
//!
//! This module defines the read-only interface the extractor scans.
//! Implementations only need to report their extents and return the
//! element at an in-bounds position.

use super::element::MatrixElement;

/// Core dense matrix trait for layout-agnostic access
///
/// The extractor never calls `element` outside `0..nrows` × `0..ncols`,
/// so implementations may index without further checks.
pub trait DenseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the element at an in-bounds position
    fn element(&self, row: usize, col: usize) -> Self::Element;

    /// Total number of stored elements, zeros included
    fn len(&self) -> usize {
        let (nrows, ncols) = self.dimensions();
        nrows * ncols
    }

    /// Returns true if either extent is zero
    fn is_empty(&self) -> bool {
        let (nrows, ncols) = self.dimensions();
        nrows == 0 || ncols == 0
    }
}

impl<M: DenseMatrix + ?Sized> DenseMatrix for &M {
    type Element = M::Element;

    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn element(&self, row: usize, col: usize) -> Self::Element {
        (**self).element(row, col)
    }
}

impl<T: MatrixElement, const R: usize, const C: usize> DenseMatrix for [[T; C]; R] {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (R, C)
    }

    fn element(&self, row: usize, col: usize) -> T {
        self[row][col]
    }
}

#[cfg(feature = "ndarray")]
impl<S, T> DenseMatrix for ndarray::ArrayBase<S, ndarray::Ix2>
where
    S: ndarray::Data<Elem = T>,
    T: MatrixElement,
{
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        self.dim()
    }

    fn element(&self, row: usize, col: usize) -> T {
        self[[row, col]]
    }
}
