// =====================================================================
// File: index/node.rs
// Date: Oct. 16, 2026
//
// Description:
//   Defines the B+Tree node (`BTreeNode`) used by the in-memory index.
//   A node is a tagged variant:
//
//   - `Leaf`  : `keys` with one value per key, in ascending key order.
//   - `Inner` : separator `keys` plus `keys.len() + 1` owned children.
//
//   Key storage is allocated once at `ORDER` slots (children at
//   `ORDER + 1`) and never grows past that: the insert path splits a
//   full node before it would have to.
//
// Notes:
//   * This file only holds the node representation, binary-search
//     routing helpers and the split primitive. The descent algorithms
//     (insert, search) live in `tree.rs`.
// =====================================================================

/// B+Tree node, either a leaf holding key/value pairs or an inner routing
/// node holding separator keys and the children they route between.
#[derive(Debug)]
pub enum BTreeNode<K, V, const ORDER: usize> {
    Leaf {
        keys: Vec<K>,
        values: Vec<V>,
    },
    Inner {
        keys: Vec<K>,
        /// Box gives each child a single owner; dropping the parent
        /// releases the subtree.
        children: Vec<Box<BTreeNode<K, V, ORDER>>>,
    },
}


impl<K, V, const ORDER: usize> BTreeNode<K, V, ORDER> {
    /// Creates an empty leaf with room for `ORDER` pairs.
    ///
    /// # Example
    /// ```
    /// use btree_bench::BTreeNode;
    /// let leaf: BTreeNode<u64, u64, 4> = BTreeNode::new_leaf();
    /// assert!(leaf.is_leaf());
    /// assert!(leaf.is_empty());
    /// ```
    pub fn new_leaf() -> Self {
        BTreeNode::Leaf {
            keys: Vec::with_capacity(ORDER),
            values: Vec::with_capacity(ORDER),
        }
    }

    /// Creates an empty inner node with room for `ORDER` separators and
    /// `ORDER + 1` children.
    pub fn new_inner() -> Self {
        BTreeNode::Inner {
            keys: Vec::with_capacity(ORDER),
            children: Vec::with_capacity(ORDER + 1),
        }
    }

    /// Creates a leaf holding a single pair. Used for the first insert
    /// into an empty tree.
    pub fn leaf_with(key: K, value: V) -> Self {
        let mut node = Self::new_leaf();
        if let BTreeNode::Leaf { keys, values } = &mut node {
            keys.push(key);
            values.push(value);
        }
        node
    }

    /// Creates an inner node with one separator and two children. This is
    /// the shape of a freshly grown root.
    pub fn inner_with(separator: K, left: Box<Self>, right: Box<Self>) -> Self {
        let mut node = Self::new_inner();
        if let BTreeNode::Inner { keys, children } = &mut node {
            keys.push(separator);
            children.push(left);
            children.push(right);
        }
        node
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BTreeNode::Leaf { .. })
    }

    /// Keys currently stored in this node, ascending.
    pub fn keys(&self) -> &[K] {
        match self {
            BTreeNode::Leaf { keys, .. } | BTreeNode::Inner { keys, .. } => keys,
        }
    }

    /// Number of keys stored (the node's `count`).
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// A full node holds `ORDER` keys and must be split before anything
    /// else is inserted into it.
    pub fn is_full(&self) -> bool {
        self.len() >= ORDER
    }

    /// Children of an inner node; empty for a leaf.
    pub fn children(&self) -> &[Box<Self>] {
        match self {
            BTreeNode::Leaf { .. } => &[],
            BTreeNode::Inner { children, .. } => children,
        }
    }

    /// Values of a leaf; empty for an inner node.
    pub fn values(&self) -> &[V] {
        match self {
            BTreeNode::Leaf { values, .. } => values,
            BTreeNode::Inner { .. } => &[],
        }
    }
}


impl<K: Ord, V, const ORDER: usize> BTreeNode<K, V, ORDER> {
    /// Index of the first key that is >= `key`, or `len()` when every
    /// stored key is smaller.
    ///
    /// # Example
    /// ```
    /// use btree_bench::BTreeNode;
    ///
    /// let mut node: BTreeNode<u64, u64, 4> = BTreeNode::leaf_with(10, 1);
    /// if let BTreeNode::Leaf { keys, values } = &mut node {
    ///     keys.push(20);
    ///     values.push(2);
    /// }
    ///
    /// assert_eq!(node.lower_bound(&5), 0);
    /// assert_eq!(node.lower_bound(&20), 1);
    /// assert_eq!(node.lower_bound(&25), 2);
    /// ```
    pub fn lower_bound(&self, key: &K) -> usize {
        lower_bound(self.keys(), key)
    }

    /// Child slot an inner node routes `key` to. An exact separator match
    /// goes right, since a separator is the smallest key of its right
    /// subtree.
    pub fn route(&self, key: &K) -> usize {
        route(self.keys(), key)
    }
}


impl<K: Clone, V, const ORDER: usize> BTreeNode<K, V, ORDER> {
    /// Split a full node around `mid = ORDER / 2`.
    ///
    /// Returns the separator to promote into the parent together with the
    /// new right sibling. `self` keeps the left half.
    ///
    /// # Behavior
    /// - **Leaf**: pairs at `[mid, ORDER)` move to the sibling. The
    ///   separator is a copy of the sibling's first key, so the key stays
    ///   reachable in the leaf level. Keys and values always move together.
    /// - **Inner**: keys at `[mid + 1, ORDER)` and children at
    ///   `[mid + 1, ORDER]` move to the sibling. `keys[mid]` is removed and
    ///   becomes the separator.
    ///
    /// In both cases `self` is left with `mid` keys.
    ///
    /// # Call outs
    /// Must only be called on a full node.
    pub fn split(&mut self) -> (K, Box<Self>) {
        debug_assert!(self.is_full(), "split called on a node that is not full");
        let mid = ORDER / 2;

        match self {
            BTreeNode::Leaf { keys, values } => {
                let mut right_keys = Vec::with_capacity(ORDER);
                right_keys.extend(keys.drain(mid..));
                let mut right_values = Vec::with_capacity(ORDER);
                right_values.extend(values.drain(mid..));

                let separator = right_keys[0].clone();
                let sibling = BTreeNode::Leaf {
                    keys: right_keys,
                    values: right_values,
                };
                (separator, Box::new(sibling))
            }
            BTreeNode::Inner { keys, children } => {
                let mut right_keys = Vec::with_capacity(ORDER);
                right_keys.extend(keys.drain(mid + 1..));
                let mut right_children = Vec::with_capacity(ORDER + 1);
                right_children.extend(children.drain(mid + 1..));

                // Left now holds keys[0..=mid]; the last one moves up.
                let separator = keys.remove(mid);
                let sibling = BTreeNode::Inner {
                    keys: right_keys,
                    children: right_children,
                };
                (separator, Box::new(sibling))
            }
        }
    }
}


/// Binary search over a sorted key slice: first index with `keys[i] >= key`.
pub(crate) fn lower_bound<K: Ord>(keys: &[K], key: &K) -> usize {
    keys.binary_search(key).unwrap_or_else(|pos| pos)
}

/// Routing rule shared by insert and search.
pub(crate) fn route<K: Ord>(keys: &[K], key: &K) -> usize {
    match keys.binary_search(key) {
        Ok(pos) => pos + 1,
        Err(pos) => pos,
    }
}
