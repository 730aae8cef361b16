use std::num::NonZeroUsize;

/// Partitions `items` into batches of at most `size`, preserving input order
/// across batches and within each batch. The final batch may be shorter.
///
/// With `size = 1` this is the identity partition: one single-element batch
/// per item, which is how non-batching pipelines are expressed.
pub fn partition<T>(items: Vec<T>, size: NonZeroUsize) -> Vec<Vec<T>> {
    let size = size.get();
    let mut remaining = items;
    let mut batches = Vec::with_capacity(remaining.len().div_ceil(size));
    while !remaining.is_empty() {
        let tail = remaining.split_off(remaining.len().min(size));
        batches.push(std::mem::replace(&mut remaining, tail));
    }
    batches
}
