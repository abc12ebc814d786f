//! Input data distributions for the bench mode.

use std::{fmt, marker::PhantomData};

use rand::{distr::Distribution, rngs::StdRng, seq::SliceRandom as _};

/// A trait for generalizing sorting data creation
pub trait Data<T: Sized + Ord + fmt::Debug> {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T>;
}

/// Values drawn uniformly from the whole signed range
#[derive(Debug)]
pub struct UniformData<T>(PhantomData<T>);

impl Data<i64> for UniformData<i64> {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<i64> {
        rand::distr::Uniform::new(i64::MIN, i64::MAX)
            .unwrap()
            .sample_iter(rng)
            .take(size)
            .collect()
    }
}

/// A shuffled permutation of `0..size`
#[derive(Debug)]
pub struct PermutationData<T>(PhantomData<T>);

impl Data<i64> for PermutationData<i64> {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<i64> {
        let mut values: Vec<i64> = (0..size as i64).collect();
        values.shuffle(rng);
        values
    }
}

/// Duplicate heavy Zipf distributed values
#[derive(Debug)]
pub struct ZipfData<T>(PhantomData<T>);

impl Data<i64> for ZipfData<i64> {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<i64> {
        rand_distr::Zipf::new(1_000.0, 1.1)
            .unwrap()
            .sample_iter(rng)
            .take(size)
            .map(|value: f64| value as i64)
            .collect()
    }
}
