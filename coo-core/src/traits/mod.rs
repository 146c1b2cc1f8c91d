//! Abstract interfaces for dense matrix scanning
//!
//! This module defines the trait abstractions the extractor is generic over.

pub mod element;
pub mod matrix;

pub use element::{ElementKind, MatrixElement};
pub use matrix::DenseMatrix;
