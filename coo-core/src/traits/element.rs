//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! scanned by the extractor, together with the closed set of element
//! kinds used to pick a default zero test.

/// Broad numeric category of an element type
///
/// The default predicate is chosen from this tag once, before the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// Signed or unsigned integers: non-zero means `!= 0`
    Integer,
    /// Floating point: non-zero means outside the near-zero tolerance
    Float,
}

/// Trait for types that can be stored as dense matrix elements
///
/// All element types must be:
/// - Pod: can be viewed from a raw byte buffer
/// - PartialEq: can be compared against zero
/// - Debug: can be reported in logs and test failures
/// - Send + Sync: can be scanned from worker threads
pub trait MatrixElement: bytemuck::Pod + PartialEq + core::fmt::Debug + Send + Sync {
    /// Numeric category used to select the default predicate
    const KIND: ElementKind;

    /// Additive identity of the type
    const ZERO: Self;

    /// Convert to f64 for tolerance comparisons
    fn to_f64(self) -> f64;
}

macro_rules! impl_matrix_element {
    ($kind:ident, $zero:expr; $($t:ty),*) => {
        $(
            impl MatrixElement for $t {
                const KIND: ElementKind = ElementKind::$kind;
                const ZERO: Self = $zero;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_matrix_element!(Integer, 0; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_matrix_element!(Float, 0.0; f32, f64);
