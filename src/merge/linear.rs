//! Linear scan merge, O(N * P).
//!
//! Every emitted element costs a scan over all partition heads, which is only
//! acceptable while the partition count is bounded by the local concurrency
//! units of one machine. Larger fan-in belongs to the heap strategy.

use crate::partition::Partition;

/// Merge the sorted `parts` of `values` into `out` by repeatedly picking the
/// smallest head among all non exhausted partitions.
pub(super) fn merge_runs<T: Ord + Copy>(values: &[T], parts: &[Partition], out: &mut Vec<T>) {
    let mut cursors = vec![0usize; parts.len()];
    let total: usize = parts.iter().map(|part| part.len).sum();
    let emitted_before = out.len();

    for _ in 0..total {
        let mut best: Option<(usize, T)> = None;

        for (source, part) in parts.iter().enumerate() {
            if cursors[source] < part.len {
                let value = values[part.offset + cursors[source]];
                // The first encountered head wins ties
                if best.is_none_or(|(_, best_value)| value < best_value) {
                    best = Some((source, value));
                }
            }
        }

        if let Some((source, value)) = best {
            out.push(value);
            cursors[source] += 1;
        }
    }

    debug_assert_eq!(out.len() - emitted_before, total);
}
