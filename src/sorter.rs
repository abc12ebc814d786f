//! The comparison sorts available to a partition worker.

mod insertion;

/// The sort applied to one partition by a sort worker
///
/// Every variant sorts ascending and mutates only the slice it is given, so
/// workers on disjoint partitions never need to synchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LocalSort {
    /// The stable algorithm used by the rust std library
    Std,
    /// The unstable algorithm used by the rust std library
    StdUnstable,
    /// Insertion sort
    Insertion,
    /// Binary insertion sort
    BinaryInsertion,
}

impl std::fmt::Display for LocalSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}

impl LocalSort {
    /// The sort function
    pub fn sorter<T: Ord>(self) -> fn(&mut [T]) {
        match self {
            LocalSort::Std => <[T]>::sort,
            LocalSort::StdUnstable => <[T]>::sort_unstable,
            LocalSort::Insertion => insertion::insertion_sort,
            LocalSort::BinaryInsertion => insertion::binary_insertion_sort,
        }
    }

    /// Return whether the sort is stable
    ///
    /// The pipeline makes no stability promise either way, this only feeds
    /// the bench mode report.
    pub fn is_stable(self) -> bool {
        match self {
            LocalSort::Std => true,
            LocalSort::StdUnstable => false,
            LocalSort::Insertion => true,
            LocalSort::BinaryInsertion => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum as _;

    const RUNS: usize = 20;
    const TEST_SIZE: usize = 500;

    #[test]
    fn empty() {
        for variant in LocalSort::value_variants() {
            variant.sorter::<i64>()(&mut []);
        }
    }

    #[test]
    fn random() {
        let mut rng = crate::test::test_rng();

        for variant in LocalSort::value_variants() {
            for run in 0..RUNS {
                let mut values = crate::test::random_values(TEST_SIZE, &mut rng);
                variant.sorter()(&mut values);
                assert!(values.is_sorted(), "{variant} run {run} was not sorted");
            }
        }
    }
}
