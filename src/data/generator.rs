// =====================================================================
// File: data/generator.rs
// Date: Oct. 16, 2026
//
//! Synthetic workloads. Keys model database primary keys `0, 2, 4, ...`
//! so that every odd number is a guaranteed miss; queries are drawn
//! uniformly from the generated key range with a fixed seed.
// =====================================================================
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Ascending keys `i * 2` for `i in 0..size`.
///
/// # Example
/// ```
/// use btree_bench::data::generate_keys;
/// assert_eq!(generate_keys(4), vec![0, 2, 4, 6]);
/// ```
pub fn generate_keys(size: usize) -> Vec<u64> {
    (0..size as u64).map(|i| i * 2).collect()
}

/// The same keys as [`generate_keys`], in a seeded random order.
pub fn generate_shuffled_keys(size: usize, seed: u64) -> Vec<u64> {
    let mut keys = generate_keys(size);
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

/// `size` queries drawn uniformly from the keys produced by
/// `generate_keys(key_range)`. Every query hits when the tree holds
/// those keys.
///
/// An empty key range yields no queries.
pub fn generate_random_queries(size: usize, key_range: usize, seed: u64) -> Vec<u64> {
    if key_range == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| rng.gen_range(0..key_range as u64) * 2)
        .collect()
}
