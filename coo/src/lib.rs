//! COO - Dense Matrix to Coordinate List Conversion
//!
//! This library converts a dense two-dimensional matrix into a map from
//! `(row, col)` positions to the non-zero values stored there, in the
//! spirit of a COO (coordinate list) sparse format.
//!
//! ## Architecture
//!
//! - **coo-core**: element and matrix traits, dense views, the coordinate map
//!   and the sequential extractor (`no_std` + `alloc`)
//! - **coo**: parallel extraction on rayon and JSON export
//!
//! ## Quick Start
//!
//! ```rust
//! use coo::{extract, extract_with, DenseView};
//!
//! fn example() -> coo::Result<()> {
//!     // Integers are kept when non-zero
//!     let map = extract(&[[0, 2, 0], [3, 0, 4], [0, 0, 0]], false);
//!     assert_eq!(map.get(1, 0), Some(&3));
//!
//!     // Floats are kept when further than 1e-20 from zero
//!     let data = [0.0, 2.1, 3.2, 1e-21];
//!     let view = DenseView::row_major(&data, 2, 2)?;
//!     let map = extract(&view, true);
//!     assert_eq!(map.len(), 2);
//!     assert_eq!(map.get(1, 2), Some(&2.1));
//!
//!     // Custom predicates replace the default zero test
//!     let map = extract_with(&[[4, 5, 6], [7, 0, 0]], false, |x| x >= 5);
//!     assert_eq!(map.len(), 3);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Column-major scan**: entries are inserted column by column
//! - **Parallel scan**: column blocks on the rayon pool, same result and order
//! - **Matrix sources**: flat buffers in either order, raw bytes, row vectors,
//!   fixed-size arrays and (with `ndarray`) ndarray arrays
//! - **JSON export**: `serde` feature, enabled by default

pub use coo_core::{
    // Core traits
    DenseMatrix, ElementKind, MatrixElement,
    // Matrix sources
    DenseView, Layout, RowSlices,
    // Output
    CoordinateMap, Position, Triplet,
    // Extraction
    extract, extract_with, try_extract_with,
    // Default predicates
    default_predicate, predicate_for_kind, FLOAT_TOLERANCE,
    // Error handling
    CooError, Result,
};

#[cfg(feature = "ndarray")]
pub use coo_core::as_matrix;

pub mod parallel;
#[cfg(feature = "serde")]
pub mod export;

pub use parallel::{par_extract, par_extract_with, par_try_extract_with, ParallelConfig};

#[cfg(feature = "serde")]
pub use export::{from_json_str, to_json_string, to_json_writer};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
