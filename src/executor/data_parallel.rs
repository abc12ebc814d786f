//! A data parallel loop region over the shared sequence.

use rayon::prelude::*;

use crate::error::SortError;
use crate::partition::Partition;

/// Sort each partition as one task of a parallel region sized to the
/// partition count
pub(super) fn sort_partitions<T: Send>(
    values: &mut [T],
    parts: &[Partition],
    sorter: fn(&mut [T]),
) -> Result<(), SortError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parts.len())
        .build()
        .map_err(|_| SortError::Worker("failed to build the data parallel pool"))?;

    let chunks = super::split_partitions(values, parts);

    // A worker panic resurfaces when the region joins; convert it into the
    // pipeline's failure mode
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pool.install(|| chunks.into_par_iter().for_each(|chunk| sorter(chunk)));
    }))
    .map_err(|_| SortError::Worker("data parallel sort worker panicked"))
}
