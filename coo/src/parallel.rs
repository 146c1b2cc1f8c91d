//! Column-partitioned parallel extraction
//!
//! The column range is split into contiguous blocks that are scanned on the
//! rayon thread pool. Blocks are concatenated in column order, so the
//! resulting map has the same insertion order as the sequential scan and
//! positions stay unique without any merge step.

use std::convert::Infallible;
use std::ops::Range;

use coo_core::{
    collect_entries, default_predicate, index_offset, try_scan_columns, CooError, CoordinateMap,
    DenseMatrix, Triplet,
};
use rayon::prelude::*;

/// Configuration for parallel extraction
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of column blocks; `None` uses the rayon pool size
    pub task_count: Option<usize>,
    /// Smallest number of columns handed to a single task
    pub min_columns_per_task: usize,
    /// Matrices with fewer elements than this are scanned sequentially
    pub sequential_threshold: usize,
}

impl ParallelConfig {
    /// Set a fixed number of column blocks
    pub fn with_task_count(mut self, task_count: usize) -> Self {
        self.task_count = Some(task_count.max(1));
        self
    }

    /// Set the minimum block width in columns
    pub fn with_min_columns_per_task(mut self, min_columns: usize) -> Self {
        self.min_columns_per_task = min_columns.max(1);
        self
    }

    /// Set the element count below which the scan stays sequential
    pub fn with_sequential_threshold(mut self, threshold: usize) -> Self {
        self.sequential_threshold = threshold;
        self
    }

    /// Split `0..ncols` into contiguous column blocks
    pub fn column_blocks(&self, ncols: usize) -> Vec<Range<usize>> {
        if ncols == 0 {
            return Vec::new();
        }

        let tasks = self
            .task_count
            .unwrap_or_else(rayon::current_num_threads)
            .max(1);
        let width = ncols.div_ceil(tasks).max(self.min_columns_per_task);

        (0..ncols)
            .step_by(width)
            .map(|start| start..(start + width).min(ncols))
            .collect()
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            task_count: None,
            min_columns_per_task: 16,
            sequential_threshold: 1 << 16,
        }
    }
}

/// Parallel counterpart of [`coo_core::extract`]
pub fn par_extract<M>(
    matrix: &M,
    one_based_index: bool,
    config: &ParallelConfig,
) -> CoordinateMap<M::Element>
where
    M: DenseMatrix + Sync + ?Sized,
{
    par_extract_with(
        matrix,
        one_based_index,
        default_predicate::<M::Element>(),
        config,
    )
}

/// Parallel counterpart of [`coo_core::extract_with`]
pub fn par_extract_with<M, P>(
    matrix: &M,
    one_based_index: bool,
    predicate: P,
    config: &ParallelConfig,
) -> CoordinateMap<M::Element>
where
    M: DenseMatrix + Sync + ?Sized,
    P: Fn(M::Element) -> bool + Sync,
{
    let scanned = par_scan(
        matrix,
        one_based_index,
        |value| Ok::<_, Infallible>(predicate(value)),
        config,
    );
    match scanned {
        Ok(entries) => finish(matrix, one_based_index, entries),
        Err(never) => match never {},
    }
}

/// Parallel counterpart of [`coo_core::try_extract_with`]
///
/// If any block fails, one of the predicate errors is returned and the
/// partial results of all blocks are dropped.
pub fn par_try_extract_with<M, P, E>(
    matrix: &M,
    one_based_index: bool,
    predicate: P,
    config: &ParallelConfig,
) -> Result<CoordinateMap<M::Element>, CooError<E>>
where
    M: DenseMatrix + Sync + ?Sized,
    P: Fn(M::Element) -> Result<bool, E> + Sync,
    E: Send,
{
    let entries = par_scan(matrix, one_based_index, predicate, config)
        .map_err(CooError::PredicateFailure)?;
    Ok(finish(matrix, one_based_index, entries))
}

fn par_scan<M, P, E>(
    matrix: &M,
    one_based_index: bool,
    predicate: P,
    config: &ParallelConfig,
) -> Result<Vec<Triplet<M::Element>>, E>
where
    M: DenseMatrix + Sync + ?Sized,
    P: Fn(M::Element) -> Result<bool, E> + Sync,
    E: Send,
{
    let (nrows, ncols) = matrix.dimensions();
    let offset = index_offset(one_based_index);

    if matrix.len() < config.sequential_threshold {
        log::trace!(
            "{} elements below parallel threshold {}, scanning sequentially",
            matrix.len(),
            config.sequential_threshold
        );
        return try_scan_columns(matrix, 0..ncols, offset, predicate);
    }

    let blocks = config.column_blocks(ncols);
    log::debug!(
        "scanning {}x{} matrix in {} column blocks",
        nrows,
        ncols,
        blocks.len()
    );

    let partials = blocks
        .into_par_iter()
        .map(|cols| try_scan_columns(matrix, cols, offset, &predicate))
        .collect::<Result<Vec<_>, E>>()?;

    Ok(partials.into_iter().flatten().collect())
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
        "extracted {} of {}x{} elements in parallel (one_based_index={})",
        entries.len(),
        nrows,
        ncols,
        one_based_index
    );
    collect_entries(entries)
}
