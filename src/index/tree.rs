// =====================================================================
// File: index/tree.rs
// Date: Oct. 16, 2026
//
// Description:
//   Implements the B+Tree index (`BPlusTree`) that manages insertion
//   and search over `BTreeNode` structures. Values live only in the
//   leaves; inner nodes hold separator keys for routing.
//
// Features:
//   - `insert`: Adds a pair, or overwrites the value of an existing key
//     (last write wins). Full nodes are split on the way down, so a
//     split never has to travel back up the tree.
//   - `search`: Binary-search routing from the root to one leaf.
//   - `clear` : Tears down every node without recursion.
//   - `stats` / `check_invariants`: Structural introspection.
//
// Notes:
//   * Relies on `node.rs` for the node variants and the split primitive.
//   * `ORDER` is the maximum number of keys per node and must be >= 2.
// =====================================================================
use super::node::{lower_bound, route};
use super::{BTreeNode, TreeStatistics};
use crate::error::InvariantViolation;

/// Fanout used when no order is given.
pub const DEFAULT_ORDER: usize = 32;

/// In-memory B+Tree over ordered keys.
///
/// Owns at most one root node; every inner node owns its children.
/// The tree also tracks the number of stored entries and its height.
#[derive(Debug)]
pub struct BPlusTree<K, V, const ORDER: usize = DEFAULT_ORDER> {
    root: Option<Box<BTreeNode<K, V, ORDER>>>,
    len: usize,
    height: usize,
}


impl<K, V, const ORDER: usize> BPlusTree<K, V, ORDER> {
    /// Create an empty tree. No node is allocated until the first insert.
    ///
    /// # Panics
    /// When `ORDER < 2`; such a node could not be split into two halves.
    pub fn new() -> Self {
        assert!(ORDER >= 2, "B+Tree order must be >= 2");
        Self {
            root: None,
            len: 0,
            height: 0,
        }
    }

    /// Number of entries stored in the leaves.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Levels from the root down to the leaves; 0 when empty, 1 for a
    /// single leaf root.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn order(&self) -> usize {
        ORDER
    }

    pub fn root(&self) -> Option<&BTreeNode<K, V, ORDER>> {
        self.root.as_deref()
    }

    /// Assemble a tree around a hand built root, bypassing `insert`.
    #[cfg(test)]
    pub(crate) fn from_parts(root: Box<BTreeNode<K, V, ORDER>>, len: usize, height: usize) -> Self {
        Self {
            root: Some(root),
            len,
            height,
        }
    }

    /// Release every node and reset the tree to empty.
    ///
    /// Children are moved onto an explicit stack before their parent is
    /// dropped, so teardown depth does not depend on tree height.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<BTreeNode<K, V, ORDER>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            if let BTreeNode::Inner { children, .. } = node.as_mut() {
                pending.append(children);
            }
        }
        self.len = 0;
        self.height = 0;
    }

    /// Collect node and slot counts for the whole tree.
    pub fn stats(&self) -> TreeStatistics {
        let Some(root) = self.root.as_deref() else {
            return TreeStatistics::empty(ORDER);
        };

        let mut stats = TreeStatistics::empty(ORDER);
        stats.height = self.height;

        let mut pending = vec![root];
        while let Some(node) = pending.pop() {
            match node {
                BTreeNode::Leaf { keys, .. } => {
                    stats.leaf_nodes += 1;
                    stats.total_keys += keys.len();
                }
                BTreeNode::Inner { children, .. } => {
                    stats.inner_nodes += 1;
                    pending.extend(children.iter().map(|child| child.as_ref()));
                }
            }
        }

        stats.leaf_fill_ratio = stats.total_keys as f64 / (stats.leaf_nodes * ORDER) as f64;
        stats
    }
}


impl<K, V, const ORDER: usize> Default for BPlusTree<K, V, ORDER> {
    fn default() -> Self {
        Self::new()
    }
}


impl<K, V, const ORDER: usize> Drop for BPlusTree<K, V, ORDER> {
    fn drop(&mut self) {
        self.clear();
    }
}


// BTree Referencing:
// https://build-your-own.org/database/
// https://www.geeksforgeeks.org/dsa/introduction-of-b-tree-2/
impl<K: Ord, V, const ORDER: usize> BPlusTree<K, V, ORDER> {
    /// Search for a key in the tree.
    ///
    /// Each level binary searches its keys; inner nodes send an exact
    /// separator match to the right child.
    ///
    /// # Returns
    /// * `Some(&V)` if the key is stored.
    /// * `None` if it is not, including on an empty tree.
    ///
    /// # Example
    /// ```
    /// use btree_bench::BPlusTree;
    /// let mut tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
    /// tree.insert(30, 300);
    /// assert_eq!(tree.search(&30), Some(&300));
    /// assert_eq!(tree.search(&25), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V> {

        // Recursive function declaration for node search
        fn search_node<'a, K: Ord, V, const ORDER: usize>(
            node: &'a BTreeNode<K, V, ORDER>,
            key: &K,
        ) -> Option<&'a V> {
            match node {
                // Base case - the leaf either holds the key or nothing does
                BTreeNode::Leaf { keys, values } => {
                    let idx = lower_bound(keys, key);
                    if idx < keys.len() && keys[idx] == *key {
                        Some(&values[idx])
                    } else {
                        None
                    }
                }
                BTreeNode::Inner { keys, children } => search_node(children[route(keys, key)].as_ref(), key),
            }
        }

        self.root.as_deref().and_then(|root| search_node(root, key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Verify every structural rule of the tree.
    ///
    /// Checks, for each node: key count within `ORDER`, strictly ascending
    /// keys, matching value/child counts, every key inside the range its
    /// parent separators allow, and that all leaves share one depth. Also
    /// checks the recorded `len` and `height` against what the leaves show.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root.as_deref() else {
            if self.len != 0 {
                return Err(InvariantViolation::LengthMismatch { recorded: self.len, counted: 0 });
            }
            if self.height != 0 {
                return Err(InvariantViolation::HeightMismatch { recorded: self.height, counted: 0 });
            }
            return Ok(());
        };

        let mut leaf_depth: Option<usize> = None;
        let mut entries = 0;
        // (node, depth, inclusive lower bound, exclusive upper bound)
        let mut pending: Vec<(&BTreeNode<K, V, ORDER>, usize, Option<&K>, Option<&K>)> =
            vec![(root, 0, None, None)];

        while let Some((node, depth, lower, upper)) = pending.pop() {
            let keys = node.keys();
            if keys.len() > ORDER {
                return Err(InvariantViolation::Overflow { depth, count: keys.len(), order: ORDER });
            }
            if let Some(position) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
                return Err(InvariantViolation::UnsortedKeys { depth, position: position + 1 });
            }
            let below = lower.is_some_and(|low| keys.first().is_some_and(|first| first < low));
            let above = upper.is_some_and(|high| keys.last().is_some_and(|last| last >= high));
            if below || above {
                return Err(InvariantViolation::SeparatorRange { depth });
            }

            match node {
                BTreeNode::Leaf { keys, values } => {
                    if keys.len() != values.len() {
                        return Err(InvariantViolation::ValueCountMismatch {
                            depth,
                            keys: keys.len(),
                            values: values.len(),
                        });
                    }
                    match leaf_depth {
                        None => leaf_depth = Some(depth),
                        Some(expected) if expected != depth => {
                            return Err(InvariantViolation::UnevenLeafDepth { expected, found: depth });
                        }
                        Some(_) => {}
                    }
                    entries += keys.len();
                }
                BTreeNode::Inner { keys, children } => {
                    if children.len() != keys.len() + 1 {
                        return Err(InvariantViolation::ChildCountMismatch {
                            depth,
                            keys: keys.len(),
                            children: children.len(),
                        });
                    }
                    for (i, child) in children.iter().enumerate() {
                        let child_lower = if i == 0 { lower } else { Some(&keys[i - 1]) };
                        let child_upper = if i == keys.len() { upper } else { Some(&keys[i]) };
                        pending.push((child.as_ref(), depth + 1, child_lower, child_upper));
                    }
                }
            }
        }

        if entries != self.len {
            return Err(InvariantViolation::LengthMismatch { recorded: self.len, counted: entries });
        }
        let counted_height = leaf_depth.map_or(0, |depth| depth + 1);
        if counted_height != self.height {
            return Err(InvariantViolation::HeightMismatch { recorded: self.height, counted: counted_height });
        }
        Ok(())
    }
}


impl<K: Ord + Clone, V, const ORDER: usize> BPlusTree<K, V, ORDER> {
    /// Insert a key-value pair into the tree.
    ///
    /// - An empty tree gets a single leaf root holding the pair.
    /// - A full root is split first, growing the tree by one level.
    /// - If the key already exists its value is replaced (last write wins)
    ///   and the old value is returned.
    ///
    /// # Returns
    /// The previous value stored under `key`, if any.
    ///
    /// # Example
    /// ```
    /// use btree_bench::BPlusTree;
    ///
    /// let mut tree: BPlusTree<u64, &str, 4> = BPlusTree::new();
    /// tree.insert(7, "seven");
    /// tree.insert(3, "three");
    /// assert_eq!(tree.search(&7), Some(&"seven"));
    ///
    /// // Overwrite existing key
    /// assert_eq!(tree.insert(7, "SEVEN"), Some("seven"));
    /// assert_eq!(tree.search(&7), Some(&"SEVEN"));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.root.as_ref().is_some_and(|root| root.is_full()) {
            self.grow_root();
        }

        let previous = match self.root.as_deref_mut() {
            Some(root) => Self::insert_non_full(root, key, value),
            None => {
                self.root = Some(Box::new(BTreeNode::leaf_with(key, value)));
                self.height = 1;
                None
            }
        };

        if previous.is_none() {
            self.len += 1;
        }
        previous
    }


    // =========================
    // Insertion helpers
    // =========================

    /// Hang the full root under a new inner root and split it there.
    fn grow_root(&mut self) {
        if let Some(mut old_root) = self.root.take() {
            let (separator, sibling) = old_root.split();
            self.root = Some(Box::new(BTreeNode::inner_with(separator, old_root, sibling)));
            self.height += 1;
        }
    }

    /// Descend from a non-full `node` to the leaf that owns `key`.
    ///
    /// Every full child is split before the descent enters it, so the
    /// node being modified always has a free slot. The routing index is
    /// recomputed after each split because the promoted separator may
    /// send the key to the new sibling.
    fn insert_non_full(node: &mut BTreeNode<K, V, ORDER>, key: K, value: V) -> Option<V> {
        let mut node = node;
        loop {
            node = match node {
                BTreeNode::Leaf { keys, values } => {
                    return Self::insert_into_leaf(keys, values, key, value);
                }
                BTreeNode::Inner { keys, children } => {
                    let mut idx = route(keys, &key);
                    if children[idx].is_full() {
                        Self::split_child(keys, children, idx);
                        idx = route(keys, &key);
                    }
                    children[idx].as_mut()
                }
            };
        }
    }

    /// Place the pair in a leaf with a free slot, shifting larger keys
    /// right. An existing key has its value replaced instead.
    fn insert_into_leaf(keys: &mut Vec<K>, values: &mut Vec<V>, key: K, value: V) -> Option<V> {
        match keys.binary_search(&key) {
            Ok(idx) => Some(std::mem::replace(&mut values[idx], value)),
            Err(idx) => {
                debug_assert!(keys.len() < ORDER, "insert into a full leaf");
                keys.insert(idx, key);
                values.insert(idx, value);
                None
            }
        }
    }

    /// Split the full child at `idx`, promoting its separator into `keys`
    /// at `idx` and linking the new sibling right after the child.
    fn split_child(keys: &mut Vec<K>, children: &mut Vec<Box<BTreeNode<K, V, ORDER>>>, idx: usize) {
        let (separator, sibling) = children[idx].split();
        keys.insert(idx, separator);
        children.insert(idx + 1, sibling);
    }
}
