// =====================================================================
// File: bench/mod.rs
// Date: Oct. 16, 2026
//
//! The `bench` module drives the index through a build phase and a
//! query phase and records how long each took.
//!
//! Structure:
//! - `timer.rs`  : [`Timer`] stopwatch.
//! - `report.rs` : [`BenchmarkResult`] and report printing.
//!
//! The runner itself lives here: [`Workload`] gathers keys and queries
//! from the configuration, [`run_with_order`] maps a runtime order onto
//! the matching compile-time tree and runs it, and [`run_baseline`] runs
//! the same workload through `std::collections::BTreeMap` for comparison.
// =====================================================================

pub mod report;
pub mod timer;

pub use self::report::{BenchmarkReport, BenchmarkResult, Measurements};
pub use self::timer::Timer;

use std::collections::BTreeMap;
use std::hint::black_box;

use log::{debug, info};

use crate::config::{BenchConfig, KeyOrder};
use crate::data;
use crate::error::{BenchError, Result};
use crate::index::BPlusTree;

/// Keys per node in std's `BTreeMap`, which is fixed at compile time.
pub const BTREEMAP_NODE_CAPACITY: usize = 11;

/// Keys to insert and keys to look up, plus a label for the report.
#[derive(Debug, Clone)]
pub struct Workload {
    pub name: String,
    pub keys: Vec<u64>,
    pub queries: Vec<u64>,
}


impl Workload {
    /// Build the workload described by `config`: a loaded dataset with
    /// queries sampled from it, or generated keys with uniform queries.
    pub fn from_config(config: &BenchConfig) -> Result<Self> {
        if let Some(path) = &config.dataset {
            let keys = data::load_binary_file(path, config.max_keys, config.sosd_header)?;
            if keys.is_empty() {
                return Err(BenchError::Dataset(format!("{} holds no keys", path.display())));
            }
            let queries = data::sample_queries(&keys, config.query_size, config.seed);
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            return Ok(Self { name, keys, queries });
        }

        let (name, keys) = match config.key_order {
            KeyOrder::Sequential => ("sequential", data::generate_keys(config.data_size)),
            KeyOrder::Shuffled => (
                "shuffled",
                data::generate_shuffled_keys(config.data_size, config.seed),
            ),
        };
        let queries = data::generate_random_queries(config.query_size, config.data_size, config.seed);
        Ok(Self {
            name: name.to_string(),
            keys,
            queries,
        })
    }
}


/// Run `workload` against a tree of the given runtime `order`.
///
/// # Errors
/// `BenchError::Config` if the order is not one the binary is built for,
/// `BenchError::Invariant` if `verify` is set and the built tree is broken.
pub fn run_with_order(order: usize, workload: &Workload, verify: bool) -> Result<BenchmarkResult> {
    match order {
        4 => run_tree::<4>(workload, verify),
        8 => run_tree::<8>(workload, verify),
        16 => run_tree::<16>(workload, verify),
        32 => run_tree::<32>(workload, verify),
        64 => run_tree::<64>(workload, verify),
        128 => run_tree::<128>(workload, verify),
        256 => run_tree::<256>(workload, verify),
        other => Err(BenchError::Config(format!("no tree built for order {}", other))),
    }
}

/// Build a `BPlusTree<u64, u64, ORDER>` from the workload keys (each key
/// is its own value), query it, then tear it down, timing each phase.
pub fn run_tree<const ORDER: usize>(workload: &Workload, verify: bool) -> Result<BenchmarkResult> {
    let mut tree: BPlusTree<u64, u64, ORDER> = BPlusTree::new();
    let mut timer = Timer::new();

    // Build
    for &key in &workload.keys {
        tree.insert(key, key);
    }
    let build_time_ms = timer.elapsed_ms();
    info!(
        "built order-{} tree from {} keys in {:.2} ms (height {})",
        ORDER,
        workload.keys.len(),
        build_time_ms,
        tree.height()
    );

    if verify {
        tree.check_invariants()?;
        info!("tree invariants hold");
    }

    // Search
    timer.reset();
    let mut hits = 0;
    for query in &workload.queries {
        if let Some(value) = tree.search(query) {
            black_box(value);
            hits += 1;
        }
    }
    let query_time_ms = timer.elapsed_ms();
    debug!("{} of {} queries hit", hits, workload.queries.len());

    let stats = tree.stats();

    // Teardown
    timer.reset();
    tree.clear();
    let teardown_time_ms = timer.elapsed_ms();

    Ok(BenchmarkResult::new(
        format!("B+Tree order {} ({})", ORDER, workload.name),
        ORDER,
        workload.keys.len(),
        workload.queries.len(),
        Measurements {
            build_time_ms,
            query_time_ms,
            teardown_time_ms,
            hits,
        },
        Some(stats),
    ))
}

/// Run `workload` through a `BTreeMap<u64, u64>` with the same phases and
/// timing as [`run_tree`]. The map reports no node statistics.
pub fn run_baseline(workload: &Workload) -> BenchmarkResult {
    let mut map: BTreeMap<u64, u64> = BTreeMap::new();
    let mut timer = Timer::new();

    // Build
    for &key in &workload.keys {
        map.insert(key, key);
    }
    let build_time_ms = timer.elapsed_ms();
    info!(
        "built BTreeMap baseline from {} keys in {:.2} ms",
        workload.keys.len(),
        build_time_ms
    );

    // Search
    timer.reset();
    let mut hits = 0;
    for query in &workload.queries {
        if let Some(value) = map.get(query) {
            black_box(value);
            hits += 1;
        }
    }
    let query_time_ms = timer.elapsed_ms();
    debug!("baseline: {} of {} queries hit", hits, workload.queries.len());

    // Teardown
    timer.reset();
    map.clear();
    let teardown_time_ms = timer.elapsed_ms();

    BenchmarkResult::new(
        format!("BTreeMap baseline ({})", workload.name),
        BTREEMAP_NODE_CAPACITY,
        workload.keys.len(),
        workload.queries.len(),
        Measurements {
            build_time_ms,
            query_time_ms,
            teardown_time_ms,
            hits,
        },
        None,
    )
}
