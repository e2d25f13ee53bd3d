// =====================================================================
// File: index/mod.rs
// Date: Oct. 16, 2026
//
//! The `index` module contains the in-memory B+Tree used as the ordered
//! index under benchmark.
//!
//! Structure:
//! - `node.rs`  : Defines the [`BTreeNode`] tagged variant and the split
//!                primitive.
//! - `tree.rs`  : Defines the [`BPlusTree`] and its algorithms
//!                (insert, search, teardown, invariant checking).
//! - `stats.rs` : [`TreeStatistics`] collected from a tree.
//! - `tests.rs` : Unit tests for the B+Tree (compiled only in test mode).
// =====================================================================

pub mod node;
pub mod stats;
pub mod tree;

pub use self::node::BTreeNode;
pub use self::stats::TreeStatistics;
pub use self::tree::{BPlusTree, DEFAULT_ORDER};

#[cfg(test)]
pub mod tests;
