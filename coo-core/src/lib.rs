#![no_std]

//! COO Core - Dense Matrix to Coordinate List Conversion
//!
//! This crate provides the element and matrix traits, borrowed dense views,
//! the coordinate map, and the sequential column-major extractor. It needs
//! `alloc` but no I/O; the `coo` crate adds the parallel scan and JSON
//! export on top.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod coordinate;
pub mod dense;
pub mod error;
pub mod extract;
pub mod predicate;
pub mod traits;
pub mod validation;

pub use coordinate::{CoordinateMap, Position, Triplet};
#[cfg(feature = "ndarray")]
pub use dense::as_matrix;
pub use dense::{DenseView, Layout, RowSlices};
pub use error::{CooError, Result};
pub use extract::{
    collect_entries, extract, extract_with, index_offset, try_extract_with, try_scan_columns,
};
pub use predicate::{default_predicate, predicate_for_kind, FLOAT_TOLERANCE};
pub use traits::{DenseMatrix, ElementKind, MatrixElement};
pub use validation::{checked_element_count, validate_shape};
