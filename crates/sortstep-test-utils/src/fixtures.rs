//! Reusable input datasets.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` values drawn uniformly from `[50, 600]` with a fixed seed.
pub fn seeded_values(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(50..=600)).collect()
}

/// Named inputs that stress cursor bounds and tie handling.
pub fn edge_cases() -> Vec<(&'static str, Vec<i32>)> {
    vec![
        ("empty", vec![]),
        ("single", vec![42]),
        ("pair_sorted", vec![1, 2]),
        ("pair_reversed", vec![2, 1]),
        ("all_equal", vec![7; 9]),
        ("already_sorted", (0..16).collect()),
        ("reversed", (0..16).rev().collect()),
        ("duplicates", vec![3, 1, 3, 2, 1, 3, 2, 2]),
        ("negatives", vec![0, -5, 12, -5, 7, i32::MIN, i32::MAX]),
        ("odd_length", vec![9, 4, 8, 1, 7, 3, 6, 2, 5]),
    ]
}
