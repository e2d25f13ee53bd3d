// =====================================================================
// File: error.rs
// Date: Oct. 16, 2026
//
// Description:
//   Error types for the benchmark crate. The B+Tree itself never fails
//   on insert or search; the only index-level error is an
//   `InvariantViolation` reported by the structural checker. Everything
//   else (dataset loading, configuration, logger setup, JSON output)
//   is wrapped into `BenchError`.
// =====================================================================
use thiserror::Error;

/// A broken structural rule found by `BPlusTree::check_invariants`.
///
/// Depth is counted from the root (root = 0). Positions refer to key
/// slots inside the offending node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("node at depth {depth} holds {count} keys, above the order {order}")]
    Overflow { depth: usize, count: usize, order: usize },

    #[error("keys out of order at depth {depth}, slot {position}")]
    UnsortedKeys { depth: usize, position: usize },

    #[error("leaf at depth {depth} has {keys} keys but {values} values")]
    ValueCountMismatch { depth: usize, keys: usize, values: usize },

    #[error("inner node at depth {depth} has {keys} keys but {children} children")]
    ChildCountMismatch { depth: usize, keys: usize, children: usize },

    #[error("key at depth {depth} falls outside the range of its parent separators")]
    SeparatorRange { depth: usize },

    #[error("leaf found at depth {found}, expected every leaf at depth {expected}")]
    UnevenLeafDepth { expected: usize, found: usize },

    #[error("tree reports {recorded} entries but its leaves hold {counted}")]
    LengthMismatch { recorded: usize, counted: usize },

    #[error("tree reports height {recorded} but its leaves sit at height {counted}")]
    HeightMismatch { recorded: usize, counted: usize },
}

/// Error type for the benchmark harness.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Index invariant violated: {source}")]
    Invariant {
        #[from]
        source: InvariantViolation,
    },

    #[error("Failed to install logger: {source}")]
    Logger {
        #[from]
        source: log::SetLoggerError,
    },

    #[error("JSON encoding error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, BenchError>;
