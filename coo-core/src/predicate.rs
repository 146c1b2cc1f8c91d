//! Default zero tests
//!
//! The default predicate depends only on the element type. It is looked
//! up once per extraction from [`MatrixElement::KIND`] and then applied
//! to every element as a plain function pointer.

use crate::{ElementKind, MatrixElement};

/// Magnitude at or below which a floating point element counts as zero
///
/// Fixed for compatibility; pass a custom predicate for another cutoff.
pub const FLOAT_TOLERANCE: f64 = 1.0e-20;

/// Exact non-zero test used for integer elements
#[inline]
pub fn is_nonzero_exact<T: MatrixElement>(value: T) -> bool {
    value != T::ZERO
}

/// Tolerance test used for floating point elements
///
/// NaN compares false on both sides and is therefore treated as zero.
#[inline]
pub fn is_nonzero_tolerant<T: MatrixElement>(value: T) -> bool {
    let value = value.to_f64();
    value < -FLOAT_TOLERANCE || FLOAT_TOLERANCE < value
}

/// Select the default predicate for an element kind
pub fn predicate_for_kind<T: MatrixElement>(kind: ElementKind) -> fn(T) -> bool {
    match kind {
        ElementKind::Integer => is_nonzero_exact::<T>,
        ElementKind::Float => is_nonzero_tolerant::<T>,
    }
}

/// The default predicate for `T`
pub fn default_predicate<T: MatrixElement>() -> fn(T) -> bool {
    predicate_for_kind(T::KIND)
}
