// =====================================================================
// File: index/stats.rs
// Date: Oct. 16, 2026
//
//! Structural statistics gathered from a [`BPlusTree`](super::BPlusTree)
//! by [`BPlusTree::stats`](super::BPlusTree::stats). Printing lives in
//! the `bench::report` module.
// =====================================================================
use serde::Serialize;

/// Node and slot counts for one tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreeStatistics {
    /// Entries stored in the leaves.
    pub total_keys: usize,
    pub leaf_nodes: usize,
    pub inner_nodes: usize,
    /// Levels from root to leaf, 0 for an empty tree.
    pub height: usize,
    pub leaf_slot_max: usize,
    pub inner_slot_max: usize,
    /// Share of leaf slots in use, in `[0, 1]`.
    pub leaf_fill_ratio: f64,
}


impl TreeStatistics {
    /// Statistics for a tree with no root.
    pub fn empty(order: usize) -> Self {
        Self {
            total_keys: 0,
            leaf_nodes: 0,
            inner_nodes: 0,
            height: 0,
            leaf_slot_max: order,
            inner_slot_max: order,
            leaf_fill_ratio: 0.0,
        }
    }

    pub fn total_nodes(&self) -> usize {
        self.leaf_nodes + self.inner_nodes
    }
}
