// =====================================================================
// File: config.rs
// Date: Oct. 16, 2026
//
// Description:
//   Command-line configuration for the benchmark binary. Every flag has
//   a default matching the reference workload (one million sequential
//   keys, half a million seeded queries, order 32), so running the
//   binary with no arguments reproduces it.
//
// Notes:
//   * `ORDER` is a compile-time parameter of the tree, so only the
//     orders in `SUPPORTED_ORDERS` can be selected at runtime.
// =====================================================================
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::data::DEFAULT_SEED;
use crate::error::{BenchError, Result};
use crate::index::DEFAULT_ORDER;

/// Tree orders the benchmark binary is built for.
pub const SUPPORTED_ORDERS: [usize; 7] = [4, 8, 16, 32, 64, 128, 256];

pub const DEFAULT_DATA_SIZE: usize = 1_000_000;
pub const DEFAULT_QUERY_SIZE: usize = 500_000;

/// Order in which generated keys are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyOrder {
    /// Ascending `0, 2, 4, ...`
    Sequential,
    /// The same keys in a seeded random order
    Shuffled,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "btree-bench")]
#[command(version)]
#[command(about = "Build and query an in-memory B+Tree, reporting throughput and tree shape", long_about = None)]
pub struct BenchConfig {
    /// Number of generated keys (ignored with --dataset)
    #[arg(long, default_value_t = DEFAULT_DATA_SIZE)]
    pub data_size: usize,

    /// Number of lookups to run after the build
    #[arg(long, default_value_t = DEFAULT_QUERY_SIZE)]
    pub query_size: usize,

    /// Maximum keys per node (4, 8, 16, 32, 64, 128 or 256)
    #[arg(long, default_value_t = DEFAULT_ORDER)]
    pub order: usize,

    /// Seed for query sampling and key shuffling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Insertion order of generated keys
    #[arg(long, value_enum, default_value_t = KeyOrder::Sequential)]
    pub key_order: KeyOrder,

    /// Load keys from a binary little-endian u64 file instead of generating them
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Cap on keys read from --dataset (0 reads all)
    #[arg(long, default_value_t = 0)]
    pub max_keys: usize,

    /// The dataset starts with an 8-byte key count (SOSD layout)
    #[arg(long)]
    pub sosd_header: bool,

    /// Check every tree invariant after the build phase
    #[arg(long)]
    pub verify: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also run the workload against std's BTreeMap and compare
    #[arg(long)]
    pub baseline: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}


impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_size: DEFAULT_DATA_SIZE,
            query_size: DEFAULT_QUERY_SIZE,
            order: DEFAULT_ORDER,
            seed: DEFAULT_SEED,
            key_order: KeyOrder::Sequential,
            dataset: None,
            max_keys: 0,
            sosd_header: false,
            verify: false,
            json: false,
            baseline: false,
            log_level: "info".to_string(),
        }
    }
}


impl BenchConfig {
    /// Reject settings the runner cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_ORDERS.contains(&self.order) {
            return Err(BenchError::Config(format!(
                "order {} is not one of {:?}",
                self.order, SUPPORTED_ORDERS
            )));
        }
        if self.dataset.is_none() && self.data_size == 0 {
            return Err(BenchError::Config("data size must be at least 1".to_string()));
        }
        if self.dataset.is_none() && (self.sosd_header || self.max_keys > 0) {
            return Err(BenchError::Config(
                "--sosd-header and --max-keys only apply with --dataset".to_string(),
            ));
        }
        self.log_level_filter()?;
        Ok(())
    }

    /// Parsed `--log-level`.
    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| BenchError::Config(format!("unknown log level '{}'", self.log_level)))
    }
}
