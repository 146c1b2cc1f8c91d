//! Shape validation utilities
//!
//! Pure arithmetic checks on matrix extents with no I/O dependencies.

pub mod shape;

pub use shape::{checked_element_count, validate_shape, validate_uniform_rows};
