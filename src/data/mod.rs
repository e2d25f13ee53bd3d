// =====================================================================
// File: data/mod.rs
// Date: Oct. 16, 2026
//
//! The `data` module produces the key and query workloads fed to the
//! index.
//!
//! Structure:
//! - `generator.rs` : Synthetic keys (sequential or shuffled) and seeded
//!                    uniform queries.
//! - `loader.rs`    : Binary `u64` dataset files (SOSD style) and query
//!                    sampling over loaded keys.
//! - `tests.rs`     : Unit tests (compiled only in test mode).
// =====================================================================

pub mod generator;
pub mod loader;

pub use self::generator::{generate_keys, generate_random_queries, generate_shuffled_keys};
pub use self::loader::{load_binary_file, sample_queries};

/// Seed used when none is given, so repeated runs see the same queries.
pub const DEFAULT_SEED: u64 = 42;
