// src/arrays/shuffle.rs — Random permutation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infra::config::ShuffleConfig;
use crate::query::map;

/// Uniformly random permutation of `seq` as a new `Vec`. The input is left
/// untouched.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Fisher-Yates from the last position down, drawing from `rng`.
pub fn shuffle_with<T: Clone, G: Rng + ?Sized>(seq: &[T], rng: &mut G) -> Vec<T> {
    let mut result = map(seq, |value, _, _| value.clone());
    for i in (1..result.len()).rev() {
        let j = rng.gen_range(0..=i);
        result.swap(i, j);
    }
    result
}

/// Same seed, same permutation.
pub fn shuffle_seeded<T: Clone>(seq: &[T], seed: u64) -> Vec<T> {
    shuffle_with(seq, &mut StdRng::seed_from_u64(seed))
}

/// Seeded when `shuffle.seed` is set, otherwise thread-random.
pub fn shuffle_configured<T: Clone>(seq: &[T], config: &ShuffleConfig) -> Vec<T> {
    match config.seed {
        Some(seed) => shuffle_seeded(seq, seed),
        None => shuffle(seq),
    }
}
