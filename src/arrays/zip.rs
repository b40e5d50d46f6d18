// src/arrays/zip.rs — Column-wise grouping of several sequences

use crate::query::{map, reduce};

/// One tuple per index up to the longest sequence; positions past the end
/// of a shorter sequence are `None`.
pub fn zip<T: Clone>(seqs: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = reduce(seqs, |max: usize, seq| max.max(seq.len()), 0).unwrap_or(0);
    (0..longest)
        .map(|i| map(seqs, |seq, _, _| seq.get(i).cloned()))
        .collect()
}
