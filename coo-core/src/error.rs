//! Error types for COO extraction

use core::convert::Infallible;
use core::fmt;

/// Errors that can occur while extracting a coordinate list
///
/// `E` is the error type of a fallible predicate. Extraction with an
/// infallible predicate uses the default `Infallible`, so the
/// `PredicateFailure` variant can never be constructed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooError<E = Infallible> {
    /// Matrix is not two-dimensional, or its extents do not match its storage
    InvalidShape,
    /// Byte buffer cannot be reinterpreted as the element type
    InvalidBuffer,
    /// The caller's predicate failed on an element
    PredicateFailure(E),
}

impl<E> CooError<E> {
    /// The predicate error, if this is a `PredicateFailure`
    pub fn predicate_error(&self) -> Option<&E> {
        match self {
            CooError::PredicateFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl CooError<Infallible> {
    /// Convert into an error with any predicate error type
    pub fn into_any<F>(self) -> CooError<F> {
        match self {
            CooError::InvalidShape => CooError::InvalidShape,
            CooError::InvalidBuffer => CooError::InvalidBuffer,
            CooError::PredicateFailure(never) => match never {},
        }
    }
}

impl<E: fmt::Display> fmt::Display for CooError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CooError::InvalidShape => write!(f, "Matrix is not a valid two-dimensional shape"),
            CooError::InvalidBuffer => {
                write!(f, "Buffer cannot be reinterpreted as the element type")
            }
            CooError::PredicateFailure(err) => write!(f, "Predicate failed: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for CooError<E> {}

/// Result type for COO operations
pub type Result<T, E = CooError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        let err: CooError = CooError::InvalidShape;
        assert_eq!(err.to_string(), "Matrix is not a valid two-dimensional shape");

        let err = CooError::PredicateFailure("bad element");
        assert_eq!(err.to_string(), "Predicate failed: bad element");
    }

    #[test]
    fn test_into_any() {
        let err: CooError<u8> = CooError::InvalidShape.into_any();
        assert_eq!(err, CooError::InvalidShape);
        assert_eq!(err.predicate_error(), None);

        let err = CooError::PredicateFailure(7u8);
        assert_eq!(err.predicate_error(), Some(&7));
    }
}
