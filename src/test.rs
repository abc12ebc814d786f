//! Contains helpers shared by the module tests

use rand::{Rng as _, SeedableRng as _};

use crate::partition::{self, Partition};

/// The seed shared by all tests
pub const TEST_SEED: u64 = 0x7d1e44c09a62b58f;
/// The rng used by each test
pub type Rng = rand::rngs::SmallRng;

/// Generate the `Rng` for a test
pub fn test_rng() -> Rng {
    Rng::seed_from_u64(TEST_SEED)
}

/// Random values from a range narrow enough to guarantee duplicates for the
/// usual test sizes
pub fn random_values(size: usize, rng: &mut Rng) -> Vec<i64> {
    (0..size).map(|_| rng.random_range(-1_000..1_000)).collect()
}

/// Assert that `actual` is `expected` sorted ascending with the multiset of
/// values preserved
pub fn assert_sorted_permutation(expected: &[i64], actual: &[i64]) {
    let mut reference = expected.to_vec();
    reference.sort_unstable();
    assert_eq!(reference, actual);
}

/// Partition `values` and sort each partition in place, leaving the slice the
/// way the merge phase expects to find it
pub fn presorted_partitions(values: &mut [i64], workers: usize) -> Vec<Partition> {
    let parts = partition::partitions(values.len(), workers);
    for part in &parts {
        values[part.range()].sort_unstable();
    }
    parts
}
