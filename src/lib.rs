//! # btree_bench
//! An in-memory B+Tree index over ordered keys, plus the harness that
//! benchmarks it.
//!
//! ## Features
//! - `BPlusTree<K, V, ORDER>`: fixed-fanout tree with preemptive splits,
//!   binary-search routing and last-write-wins inserts
//! - Structural checker and node/slot statistics
//! - Sequential, shuffled or file-loaded (SOSD style) key workloads
//! - Timed build, query and teardown phases with text or JSON reports
//! - Optional `std::collections::BTreeMap` baseline run for comparison
//!
//! ## Usage
//! The binary in `main.rs` parses a [`BenchConfig`] and calls
//! [`run_report`]. All reusable logic and unit tests live here.
//!
//! ```
//! use btree_bench::BPlusTree;
//!
//! let mut tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
//! for key in [10, 20, 30, 40, 50] {
//!     tree.insert(key, key);
//! }
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.search(&30), Some(&30));
//! assert_eq!(tree.search(&25), None);
//! ```
// =====================================================================
// File: lib.rs
// Date: Oct. 16, 2026
// =====================================================================
pub mod error;
pub use error::{BenchError, InvariantViolation, Result};

pub mod index;
pub use index::{BPlusTree, BTreeNode, TreeStatistics, DEFAULT_ORDER};

pub mod data;

pub mod bench;
pub use bench::{BenchmarkReport, BenchmarkResult, Workload};

pub mod config;
pub use config::{BenchConfig, KeyOrder, SUPPORTED_ORDERS};

pub mod logging;

use log::info;


/// Prepare the configured workload and run it.
///
/// # Errors
/// Any configuration, dataset or invariant failure from the run.
///
/// # Example
/// ```
/// use btree_bench::{run_benchmark, BenchConfig};
///
/// let config = BenchConfig {
///     data_size: 1_000,
///     query_size: 100,
///     order: 16,
///     verify: true,
///     ..BenchConfig::default()
/// };
/// let result = run_benchmark(&config).unwrap();
/// assert_eq!(result.hits, 100);
/// ```
pub fn run_benchmark(config: &BenchConfig) -> Result<BenchmarkResult> {
    let workload = prepare(config)?;
    bench::run_with_order(config.order, &workload, config.verify)
}

/// Run the B+Tree and, when `config.baseline` is set, the `BTreeMap`
/// baseline over one shared workload.
///
/// # Example
/// ```
/// use btree_bench::{run_report, BenchConfig};
///
/// let config = BenchConfig {
///     data_size: 1_000,
///     query_size: 100,
///     baseline: true,
///     ..BenchConfig::default()
/// };
/// let report = run_report(&config).unwrap();
/// let baseline = report.baseline.unwrap();
/// assert_eq!(baseline.hits, report.btree.hits);
/// ```
pub fn run_report(config: &BenchConfig) -> Result<BenchmarkReport> {
    let workload = prepare(config)?;
    let btree = bench::run_with_order(config.order, &workload, config.verify)?;
    let baseline = config.baseline.then(|| bench::run_baseline(&workload));
    Ok(BenchmarkReport { btree, baseline })
}

fn prepare(config: &BenchConfig) -> Result<Workload> {
    config.validate()?;

    let workload = Workload::from_config(config)?;
    info!(
        "[Data] Prepared {} keys, {} queries ({})",
        workload.keys.len(),
        workload.queries.len(),
        workload.name
    );
    Ok(workload)
}
