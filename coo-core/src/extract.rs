//! Dense to coordinate-list extraction
//!
//! The scan walks the matrix in column-major order: every row of column 0,
//! then every row of column 1, and so on. Each element is passed to a
//! predicate exactly once, and elements that pass are recorded under their
//! `(row, col)` position, shifted by one on both axes when one-based
//! indices are requested.
//!
//! All entry points are all-or-nothing: a failing predicate aborts the scan
//! and no partial map is returned.

use core::convert::Infallible;
use core::ops::Range;

use alloc::vec::Vec;

use crate::predicate::default_predicate;
use crate::{CooError, CoordinateMap, DenseMatrix, MatrixElement, Triplet};

/// Offset added to physical indices
#[inline]
pub const fn index_offset(one_based_index: bool) -> usize {
    if one_based_index {
        1
    } else {
        0
    }
}

/// Scan a range of columns and collect the entries that pass `predicate`
///
/// This is the building block shared by the sequential and parallel
/// extractors. Entries are returned in column-major order and carry
/// `offset` already applied to both indices. `cols` must lie within the
/// matrix extents.
pub fn try_scan_columns<M, P, E>(
    matrix: &M,
    cols: Range<usize>,
    offset: usize,
    mut predicate: P,
) -> Result<Vec<Triplet<M::Element>>, E>
where
    M: DenseMatrix + ?Sized,
    P: FnMut(M::Element) -> Result<bool, E>,
{
    let (nrows, _) = matrix.dimensions();
    let mut entries = Vec::new();

    for col in cols {
        for row in 0..nrows {
            let value = matrix.element(row, col);
            if predicate(value)? {
                entries.push(Triplet::new(row + offset, col + offset, value));
            }
        }
    }

    Ok(entries)
}

/// Convert a dense matrix to a coordinate map using the default predicate
///
/// Integer elements are kept when non-zero; floating point elements are
/// kept when their magnitude exceeds [`FLOAT_TOLERANCE`](crate::FLOAT_TOLERANCE).
///
/// ```
/// use coo_core::extract;
///
/// let map = extract(&[[0, 2, 0], [3, 0, 4], [0, 0, 0]], false);
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get(1, 2), Some(&4));
/// ```
pub fn extract<M>(matrix: &M, one_based_index: bool) -> CoordinateMap<M::Element>
where
    M: DenseMatrix + ?Sized,
{
    extract_with(matrix, one_based_index, default_predicate::<M::Element>())
}

/// Convert a dense matrix to a coordinate map, keeping elements for which
/// `predicate` returns true
pub fn extract_with<M, P>(
    matrix: &M,
    one_based_index: bool,
    mut predicate: P,
) -> CoordinateMap<M::Element>
where
    M: DenseMatrix + ?Sized,
    P: FnMut(M::Element) -> bool,
{
    let (_, ncols) = matrix.dimensions();
    let scanned = try_scan_columns(matrix, 0..ncols, index_offset(one_based_index), |value| {
        Ok::<_, Infallible>(predicate(value))
    });
    let entries = match scanned {
        Ok(entries) => entries,
        Err(never) => match never {},
    };
    finish(matrix, one_based_index, entries)
}

/// Convert a dense matrix to a coordinate map with a fallible predicate
///
/// The first predicate error aborts the scan and is returned as
/// `CooError::PredicateFailure`.
pub fn try_extract_with<M, P, E>(
    matrix: &M,
    one_based_index: bool,
    predicate: P,
) -> Result<CoordinateMap<M::Element>, CooError<E>>
where
    M: DenseMatrix + ?Sized,
    P: FnMut(M::Element) -> Result<bool, E>,
{
    let (_, ncols) = matrix.dimensions();
    let entries = try_scan_columns(matrix, 0..ncols, index_offset(one_based_index), predicate)
        .map_err(CooError::PredicateFailure)?;
    Ok(finish(matrix, one_based_index, entries))
}

fn finish<M>(
    matrix: &M,
    one_based_index: bool,
    entries: Vec<Triplet<M::Element>>,
) -> CoordinateMap<M::Element>
where
    M: DenseMatrix + ?Sized,
{
    let (nrows, ncols) = matrix.dimensions();
    log::debug!(
        "extracted {} of {}x{} elements (one_based_index={})",
        entries.len(),
        nrows,
        ncols,
        one_based_index
    );
    collect_entries(entries)
}

/// Build a map from entries with pairwise distinct positions
pub fn collect_entries<T: MatrixElement>(entries: Vec<Triplet<T>>) -> CoordinateMap<T> {
    let mut map = CoordinateMap::with_capacity(entries.len());
    map.extend(entries);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DenseView, RowSlices};
    use alloc::vec;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    fn map_of<T: Copy>(entries: &[((usize, usize), T)]) -> CoordinateMap<T> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_integer_default_predicate() {
        let matrix = [[0, 2, 0], [3, 0, 4], [0, 0, 0]];
        let result = extract(&matrix, false);
        assert_eq!(result, map_of(&[((0, 1), 2), ((1, 0), 3), ((1, 2), 4)]));
    }

    #[test]
    fn test_float_default_predicate() {
        let matrix = [[0.0, 2.1, 0.0], [3.2, 0.0, 0.0], [0.0, 0.0, 1e-21]];
        let result = extract(&matrix, false);
        assert_eq!(result, map_of(&[((0, 1), 2.1), ((1, 0), 3.2)]));
    }

    #[test]
    fn test_one_based_index() {
        let matrix = [[0, 0, 5], [6, 0, 0], [0, 0, 0]];
        let result = extract(&matrix, true);
        assert_eq!(result, map_of(&[((1, 3), 5), ((2, 1), 6)]));
    }

    #[test]
    fn test_custom_predicate() {
        let matrix = [[4, 5, 6], [7, 0, 0], [0, 8, 9]];
        let result = extract_with(&matrix, false, |x| x >= 5);
        assert_eq!(
            result,
            map_of(&[
                ((0, 1), 5),
                ((0, 2), 6),
                ((1, 0), 7),
                ((2, 1), 8),
                ((2, 2), 9),
            ])
        );
    }

    #[test]
    fn test_all_zeros() {
        let matrix = [[0i32; 3]; 3];
        assert!(extract(&matrix, false).is_empty());
    }

    #[test]
    fn test_empty_extents() {
        let no_rows: [[u8; 4]; 0] = [];
        assert!(extract(&no_rows, false).is_empty());

        let no_cols = DenseView::<f64>::row_major(&[], 3, 0).unwrap();
        assert!(extract(&no_cols, true).is_empty());
    }

    #[test]
    fn test_column_major_order() {
        let matrix = [[1, 2], [3, 4]];
        let keys: Vec<_> = extract(&matrix, false).keys().collect();
        assert_eq!(keys, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

        let mut seen = Vec::new();
        extract_with(&matrix, false, |x| {
            seen.push(x);
            true
        });
        assert_eq!(seen, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_predicate_failure_aborts() {
        let matrix = [[1, 2], [-3, 4]];
        let mut calls = 0;
        let result = try_extract_with(&matrix, false, |x: i32| {
            calls += 1;
            if x < 0 {
                Err("negative element")
            } else {
                Ok(true)
            }
        });

        assert_eq!(result, Err(CooError::PredicateFailure("negative element")));
        // Column 0 is (1, -3): the scan stops at the second element
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_try_extract_success() {
        let rows = vec![vec![0u16, 3], vec![0, 0]];
        let view = RowSlices::new(&rows).unwrap();
        let result = try_extract_with(&view, true, |x| Ok::<_, ()>(x != 0)).unwrap();
        assert_eq!(result, map_of(&[((1, 2), 3)]));
    }

    #[test]
    fn test_scan_columns_range() {
        let matrix = [[1, 0, 2], [0, 3, 4]];
        let entries = try_scan_columns(&matrix, 1..3, 0, |x| Ok::<_, ()>(x != 0)).unwrap();
        assert_eq!(
            entries,
            vec![
                Triplet::new(1, 1, 3),
                Triplet::new(0, 2, 2),
                Triplet::new(1, 2, 4)
            ]
        );
    }

    #[test]
    fn test_random_properties() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..20 {
            let nrows = rng.gen_range(0..12);
            let ncols = rng.gen_range(0..12);
            let data: Vec<i32> = (0..nrows * ncols)
                .map(|_| if rng.gen_bool(0.3) { rng.gen_range(-9..10) } else { 0 })
                .collect();
            let view = DenseView::row_major(&data, nrows, ncols).unwrap();

            let zero_based = extract(&view, false);
            let one_based = extract(&view, true);

            // Membership and count
            let expected = data.iter().filter(|&&x| x != 0).count();
            assert_eq!(zero_based.len(), expected);
            for row in 0..nrows {
                for col in 0..ncols {
                    let value = data[row * ncols + col];
                    assert_eq!(zero_based.contains_key(row, col), value != 0);
                }
            }

            // One-based shift
            assert_eq!(one_based.len(), zero_based.len());
            for ((row, col), value) in zero_based.iter() {
                assert_eq!(one_based.get(row + 1, col + 1), Some(value));
            }

            // Idempotence
            assert_eq!(extract(&view, false), zero_based);
        }
    }
}
