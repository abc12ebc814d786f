//! Worker threads with private partition copies, exchanged through
//! scatter/gather channel messages.
//!
//! Unlike the shared memory substrates no worker ever touches the backing
//! sequence. The coordinator copies each partition out and sends it to the
//! owning worker, the worker sorts its private copy and sends it back tagged
//! with its partition id, and the coordinator writes every gathered block
//! back at exactly the offset it was scattered from. The merge phase relies
//! on that offset correspondence to locate each sorted run.

use crate::error::SortError;
use crate::partition::Partition;

/// Scatter, sort remotely, gather.
pub(super) fn sort_partitions<T: Copy + Send>(
    values: &mut [T],
    parts: &[Partition],
    sorter: fn(&mut [T]),
) -> Result<(), SortError> {
    std::thread::scope(|scope| {
        let (result_tx, result_rx) =
            crossbeam_channel::bounded::<(usize, std::thread::Result<Vec<T>>)>(parts.len());

        let mut task_senders = Vec::with_capacity(parts.len());
        for source in 0..parts.len() {
            let (task_tx, task_rx) = crossbeam_channel::bounded::<Vec<T>>(1);
            let result_tx = result_tx.clone();

            scope.spawn(move || {
                for mut block in task_rx.iter() {
                    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                        sorter(&mut block);
                        block
                    }));

                    if result_tx.send((source, outcome)).is_err() {
                        return;
                    }
                }
            });

            task_senders.push(task_tx);
        }
        drop(result_tx);

        // Scatter: each worker receives a private copy of its partition
        for (part, sender) in parts.iter().zip(&task_senders) {
            let mut block = Vec::new();
            block.try_reserve_exact(part.len)?;
            block.extend_from_slice(&values[part.range()]);

            sender
                .send(block)
                .map_err(|_| SortError::Worker("scatter failed: worker disconnected"))?;
        }
        drop(task_senders);

        // Gather: write each sorted block back into its original slot
        for _ in 0..parts.len() {
            let (source, outcome) = result_rx
                .recv()
                .map_err(|_| SortError::Worker("gather failed: worker disconnected"))?;
            let block = outcome.map_err(|_| SortError::Worker("sort worker panicked"))?;

            let part = parts[source];
            if block.len() != part.len {
                return Err(SortError::Worker("gathered block does not match its partition"));
            }
            values[part.range()].copy_from_slice(&block);
        }

        Ok(())
    })
}
