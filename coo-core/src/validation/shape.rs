//! Extent and buffer-length validation for dense matrices

use crate::CooError;

/// Number of elements in an `nrows` × `ncols` matrix
///
/// Fails with `InvalidShape` if the product does not fit in `usize`.
pub const fn checked_element_count(nrows: usize, ncols: usize) -> Result<usize, CooError> {
    match nrows.checked_mul(ncols) {
        Some(count) => Ok(count),
        None => Err(CooError::InvalidShape),
    }
}

/// Validate that a buffer of `len` elements holds exactly `nrows` × `ncols`
pub const fn validate_shape(len: usize, nrows: usize, ncols: usize) -> Result<(), CooError> {
    match checked_element_count(nrows, ncols) {
        Ok(count) if count == len => Ok(()),
        _ => Err(CooError::InvalidShape),
    }
}

/// Validate that every row has the same length and return it
///
/// An empty set of rows has zero columns.
pub fn validate_uniform_rows<I>(row_lengths: I) -> Result<usize, CooError>
where
    I: IntoIterator<Item = usize>,
{
    let mut lengths = row_lengths.into_iter();
    let Some(ncols) = lengths.next() else {
        return Ok(0);
    };

    if lengths.all(|len| len == ncols) {
        Ok(ncols)
    } else {
        Err(CooError::InvalidShape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_element_count() {
        assert_eq!(checked_element_count(3, 4), Ok(12));
        assert_eq!(checked_element_count(0, 4), Ok(0));
        assert_eq!(
            checked_element_count(usize::MAX, 2),
            Err(CooError::InvalidShape)
        );
    }

    #[test]
    fn test_validate_shape() {
        assert_eq!(validate_shape(6, 2, 3), Ok(()));
        assert_eq!(validate_shape(0, 0, 5), Ok(()));
        assert_eq!(validate_shape(5, 2, 3), Err(CooError::InvalidShape));
        assert_eq!(
            validate_shape(0, usize::MAX, usize::MAX),
            Err(CooError::InvalidShape)
        );
    }

    #[test]
    fn test_validate_uniform_rows() {
        assert_eq!(validate_uniform_rows([3, 3, 3]), Ok(3));
        assert_eq!(validate_uniform_rows([0usize; 0]), Ok(0));
        assert_eq!(validate_uniform_rows([0, 0]), Ok(0));
        assert_eq!(validate_uniform_rows([3, 2, 3]), Err(CooError::InvalidShape));
    }
}
