//! One scoped thread per partition over the shared sequence.

use crate::error::SortError;
use crate::partition::Partition;

/// Sort each partition on its own thread, joining every worker before
/// returning
pub(super) fn sort_partitions<T: Send>(
    values: &mut [T],
    parts: &[Partition],
    sorter: fn(&mut [T]),
) -> Result<(), SortError> {
    let chunks = super::split_partitions(values, parts);

    std::thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| scope.spawn(move || sorter(chunk)))
            .collect();

        // Join every worker before reporting a failure
        let mut worker_panicked = false;
        for handle in handles {
            worker_panicked |= handle.join().is_err();
        }

        if worker_panicked {
            Err(SortError::Worker("sort worker panicked"))
        } else {
            Ok(())
        }
    })
}
