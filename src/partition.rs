//! Balanced contiguous splits of the input sequence.

/// A contiguous sub range of the backing sequence, owned by exactly one sort
/// worker for the duration of the sort phase.
///
/// Partitions produced by [`partitions`] are pairwise disjoint, gapless and
/// in source order, so `sum(len)` equals the sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Index of the first element
    pub offset: usize,
    /// Number of elements
    pub len: usize,
}

impl Partition {
    /// The index range covered by this partition
    pub fn range(self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Split `n` elements into at most `workers` balanced partitions.
///
/// Partition `p` covers `[p * n / workers, (p + 1) * n / workers)`, so lengths
/// differ by at most one element. A degree larger than `n` is clamped to `n`
/// so no partition is ever empty; `n == 0` yields no partitions at all.
pub fn partitions(n: usize, workers: usize) -> Vec<Partition> {
    debug_assert!(workers >= 1, "concurrency degree is validated by the pipeline");

    let count = workers.min(n);
    let mut parts = Vec::with_capacity(count);
    for index in 0..count {
        let start = index * n / count;
        let end = (index + 1) * n / count;
        parts.push(Partition {
            offset: start,
            len: end - start,
        });
    }
    parts
}
