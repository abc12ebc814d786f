//! Dispatch of concurrent partition sorts across the available substrates.

mod data_parallel;
mod message_passing;
mod threads;

use crate::error::SortError;
use crate::partition::Partition;
use crate::sorter::LocalSort;

/// The concurrency substrate carrying the sort phase
///
/// Every variant satisfies the same contract: sort all partitions
/// concurrently and return only once every partition is sorted. No partial
/// result is observable before the barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Executor {
    /// One scoped thread per partition over the shared sequence
    Threads,
    /// A data parallel loop region over the shared sequence
    DataParallel,
    /// Worker threads holding private partition copies, exchanged through
    /// scatter/gather channel messages
    MessagePassing,
}

impl std::fmt::Display for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}

impl Executor {
    /// Sort every partition of `values` concurrently, returning once all
    /// workers have finished
    ///
    /// # Errors
    ///
    /// Any worker failure is fatal to the whole sort; there is no partial
    /// success mode and no retry.
    pub fn sort_partitions<T: Ord + Copy + Send>(
        self,
        values: &mut [T],
        parts: &[Partition],
        local_sort: LocalSort,
    ) -> Result<(), SortError> {
        let sorter = local_sort.sorter::<T>();

        match self {
            Executor::Threads => threads::sort_partitions(values, parts, sorter),
            Executor::DataParallel => data_parallel::sort_partitions(values, parts, sorter),
            Executor::MessagePassing => message_passing::sort_partitions(values, parts, sorter),
        }
    }
}

/// Split `values` into one mutable sub slice per partition.
///
/// The partitions are contiguous and gapless, so handing out disjoint
/// `&mut [T]` ranges is all the shared memory substrates need to sort
/// concurrently without any further synchronization.
fn split_partitions<'a, T>(values: &'a mut [T], parts: &[Partition]) -> Vec<&'a mut [T]> {
    debug_assert!(parts.first().is_none_or(|part| part.offset == 0));
    debug_assert!(
        parts
            .windows(2)
            .all(|pair| pair[0].offset + pair[0].len == pair[1].offset)
    );

    let mut remaining = values;
    let mut chunks = Vec::with_capacity(parts.len());
    for part in parts {
        let (chunk, rest) = std::mem::take(&mut remaining).split_at_mut(part.len);
        chunks.push(chunk);
        remaining = rest;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition;
    use clap::ValueEnum as _;

    const TEST_SIZE: usize = 400;

    #[test]
    fn sorts_every_partition() {
        let mut rng = crate::test::test_rng();

        for executor in Executor::value_variants() {
            for workers in [1, 2, 3, 7] {
                let original = crate::test::random_values(TEST_SIZE, &mut rng);
                let mut values = original.clone();
                let parts = partition::partitions(values.len(), workers);

                executor
                    .sort_partitions(&mut values, &parts, LocalSort::StdUnstable)
                    .unwrap();

                for part in &parts {
                    assert!(
                        values[part.range()].is_sorted(),
                        "{executor} left partition {part:?} unsorted"
                    );
                }

                // The sort phase must neither lose nor invent elements
                let mut expected = original;
                expected.sort_unstable();
                let mut actual = values;
                actual.sort_unstable();
                assert_eq!(expected, actual, "{executor} changed the multiset");
            }
        }
    }

    #[test]
    fn no_partitions_no_work() {
        for executor in Executor::value_variants() {
            let mut values: [i64; 0] = [];
            executor
                .sort_partitions(&mut values, &[], LocalSort::Std)
                .unwrap();
        }
    }

    fn panicking_sort<T>(_: &mut [T]) {
        panic!("worker died");
    }

    #[test]
    fn worker_panic_is_fatal() {
        let parts = partition::partitions(6, 2);

        let mut values = [3i64, 1, 2, 5, 4, 0];
        assert!(matches!(
            threads::sort_partitions(&mut values, &parts, panicking_sort),
            Err(SortError::Worker(_))
        ));

        let mut values = [3i64, 1, 2, 5, 4, 0];
        assert!(matches!(
            data_parallel::sort_partitions(&mut values, &parts, panicking_sort),
            Err(SortError::Worker(_))
        ));

        let mut values = [3i64, 1, 2, 5, 4, 0];
        assert!(matches!(
            message_passing::sort_partitions(&mut values, &parts, panicking_sort),
            Err(SortError::Worker(_))
        ));
    }

    #[test]
    fn split_matches_partition_bounds() {
        let mut values: Vec<i64> = (0..10).collect();
        let parts = partition::partitions(values.len(), 3);

        let chunks = split_partitions(&mut values, &parts);
        let lengths: Vec<usize> = chunks.iter().map(|chunk| chunk.len()).collect();
        assert_eq!(lengths, parts.iter().map(|part| part.len).collect::<Vec<_>>());
    }
}
