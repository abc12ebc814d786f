//! The partition, parallel sort, k-way merge pipeline.

use log::debug;

use crate::error::SortError;
use crate::executor::Executor;
use crate::merge::MergeStrategy;
use crate::partition;
use crate::sorter::LocalSort;

/// Control parameters of one sort invocation
#[derive(Debug, Clone, Copy)]
pub struct SortOptions {
    /// Concurrency degree, the number of partitions and sort workers
    pub workers: usize,
    /// Concurrency substrate the sort phase is dispatched on
    pub executor: Executor,
    /// Comparison sort applied to each partition
    pub local_sort: LocalSort,
    /// Strategy combining the sorted partitions
    pub merge_strategy: MergeStrategy,
}

/// Sort `values` ascending by splitting them into balanced partitions,
/// sorting every partition concurrently and k-way merging the sorted runs.
///
/// The result is all or nothing: on success `values` holds the ascending
/// permutation of its previous contents, on error no merged output was
/// produced (the slice may be left with individually sorted partitions) and
/// the invocation can simply be repeated.
///
/// # Errors
///
/// - [`SortError::InvalidArgument`] if `options.workers` is zero, raised
///   before any work is dispatched
/// - [`SortError::Allocation`] if a partition copy or the merge buffer cannot
///   be reserved
/// - [`SortError::Worker`] if a sort worker dies or a scatter/gather exchange
///   breaks down
pub fn sort_in_place<T: Ord + Copy + Send>(
    values: &mut [T],
    options: &SortOptions,
) -> Result<(), SortError> {
    if options.workers == 0 {
        return Err(SortError::InvalidArgument("concurrency degree must be at least 1"));
    }

    if values.is_empty() {
        return Ok(());
    }

    let parts = partition::partitions(values.len(), options.workers);

    let sort_started = std::time::Instant::now();
    options
        .executor
        .sort_partitions(values, &parts, options.local_sort)?;
    debug!(
        "sorted {count} partitions on {executor} in {elapsed:?}",
        count = parts.len(),
        executor = options.executor,
        elapsed = sort_started.elapsed(),
    );

    let merge_started = std::time::Instant::now();
    let mut merged = Vec::new();
    merged.try_reserve_exact(values.len())?;
    options.merge_strategy.merge(values, &parts, &mut merged);
    values.copy_from_slice(&merged);
    debug!(
        "merged {count} elements with {strategy} in {elapsed:?}",
        count = values.len(),
        strategy = options.merge_strategy,
        elapsed = merge_started.elapsed(),
    );

    Ok(())
}
