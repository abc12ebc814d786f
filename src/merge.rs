//! The k-way merge strategies combining sorted partitions into one run.

mod heap;
mod linear;

use crate::partition::Partition;

/// Strategy used to merge the sorted partitions
///
/// Both strategies produce identical value orderings on the same sorted
/// partitions; they differ only in how the next smallest head element is
/// located. The strategy is selected independently of the execution
/// substrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MergeStrategy {
    /// Min heap of partition cursors, O(N log P)
    Heap,
    /// Scan of every partition head per element, O(N * P), only acceptable
    /// while P stays small
    LinearScan,
}

impl std::fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}

impl MergeStrategy {
    /// Append the merged contents of the sorted `parts` of `values` to `out`
    ///
    /// Every partition must already be sorted ascending; empty partitions are
    /// skipped. `out` needs capacity for the total partition length, the
    /// merge itself does not grow it.
    pub fn merge<T: Ord + Copy>(self, values: &[T], parts: &[Partition], out: &mut Vec<T>) {
        match self {
            MergeStrategy::Heap => heap::merge_runs(values, parts, out),
            MergeStrategy::LinearScan => linear::merge_runs(values, parts, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 25;
    const TEST_SIZE: usize = 500;

    /// Both strategies must emit value identical output on the same
    /// pre-sorted partitions
    #[test]
    fn strategies_agree() {
        let mut rng = crate::test::test_rng();

        for run in 0..RUNS {
            for workers in [1, 2, 3, 8, 16] {
                let mut values = crate::test::random_values(TEST_SIZE, &mut rng);
                let parts = crate::test::presorted_partitions(&mut values, workers);

                let mut with_heap = Vec::with_capacity(values.len());
                MergeStrategy::Heap.merge(&values, &parts, &mut with_heap);

                let mut with_scan = Vec::with_capacity(values.len());
                MergeStrategy::LinearScan.merge(&values, &parts, &mut with_scan);

                assert_eq!(with_heap, with_scan, "run {run} workers {workers}");
                crate::test::assert_sorted_permutation(&values, &with_heap);
            }
        }
    }

    #[test]
    fn single_partition_passes_through() {
        let mut values = crate::test::random_values(64, &mut crate::test::test_rng());
        let parts = crate::test::presorted_partitions(&mut values, 1);

        for strategy in [MergeStrategy::Heap, MergeStrategy::LinearScan] {
            let mut out = Vec::with_capacity(values.len());
            strategy.merge(&values, &parts, &mut out);
            assert_eq!(out, values);
        }
    }
}
