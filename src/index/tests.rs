// =====================================================================
// File: index/tests.rs
// Date: Oct. 16, 2026
//
// Description:
//   Unit tests for the B+Tree implementation (`BTreeNode` and
//   `BPlusTree`). Covers node construction, routing, splits, insert,
//   search, teardown and the structural checker.
//
// Notes:
//   * Only compiled when running `cargo test`.
//   * Does not affect release builds.
// =====================================================================


// =================================================================
// Node level tests - construction, routing and splitting
// =================================================================
#[cfg(test)]
mod node_tests {
    use crate::BTreeNode;

    type Node4 = BTreeNode<u64, u64, 4>;

    fn full_leaf() -> Node4 {
        let mut node = Node4::new_leaf();
        if let BTreeNode::Leaf { keys, values } = &mut node {
            keys.extend([1, 2, 3, 4]);
            values.extend([10, 20, 30, 40]);
        }
        node
    }

    #[test]
    fn test_new_leaf_node() {
        let node = Node4::new_leaf();
        assert!(node.is_leaf());
        assert!(node.is_empty());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_new_inner_node() {
        let node = Node4::new_inner();
        assert!(!node.is_leaf());
        assert_eq!(node.len(), 0);
        assert!(node.values().is_empty());
    }

    #[test]
    fn leaf_with_holds_one_pair() {
        let node = Node4::leaf_with(7, 70);
        assert_eq!(node.keys(), &[7]);
        assert_eq!(node.values(), &[70]);
        assert!(!node.is_full());
    }

    #[test]
    fn lower_bound_boundaries() {
        let node = full_leaf();
        assert_eq!(node.lower_bound(&0), 0);
        assert_eq!(node.lower_bound(&3), 2);
        assert_eq!(node.lower_bound(&99), 4);
    }

    #[test]
    fn route_sends_exact_match_right() {
        let node = full_leaf();
        // Below everything, between keys, exact hit, above everything
        assert_eq!(node.route(&0), 0);
        assert_eq!(node.route(&2), 2);
        assert_eq!(node.route(&4), 4);
        assert_eq!(node.route(&100), 4);
    }

    #[test]
    fn split_leaf_copies_separator_up() {
        let mut left = full_leaf();
        assert!(left.is_full());

        let (separator, right) = left.split();

        assert_eq!(separator, 3);
        assert_eq!(left.keys(), &[1, 2]);
        assert_eq!(left.values(), &[10, 20]);
        // Separator stays in the right leaf with its own value
        assert_eq!(right.keys(), &[3, 4]);
        assert_eq!(right.values(), &[30, 40]);
    }

    #[test]
    fn split_inner_moves_separator_up() {
        let mut inner = Node4::new_inner();
        if let BTreeNode::Inner { keys, children } = &mut inner {
            keys.extend([10, 20, 30, 40]);
            for i in 0..5u64 {
                children.push(Box::new(Node4::leaf_with(i * 10, i)));
            }
        }

        let (separator, right) = inner.split();

        assert_eq!(separator, 30);
        assert_eq!(inner.keys(), &[10, 20]);
        assert_eq!(inner.children().len(), 3);
        assert_eq!(right.keys(), &[40]);
        assert_eq!(right.children().len(), 2);
        // The children after the separator moved in order
        assert_eq!(right.children()[0].keys(), &[30]);
        assert_eq!(right.children()[1].keys(), &[40]);
    }
}


// =================================================================
// Tree level tests - insert, search, growth and teardown
// =================================================================
#[cfg(test)]
mod index_tests {
    use crate::{BPlusTree, BTreeNode, InvariantViolation};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    #[test]
    fn test_new_tree_is_empty() {
        let tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.order(), 4);
        assert!(tree.root().is_none());
    }

    #[test]
    #[should_panic(expected = "order must be >= 2")]
    fn order_below_two_is_rejected() {
        let _tree: BPlusTree<u64, u64, 1> = BPlusTree::new();
    }

    #[test]
    fn search_empty_tree_allocates_nothing() {
        let tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
        assert_eq!(tree.search(&42), None);
        assert!(!tree.contains_key(&42));
        assert!(tree.root().is_none());
    }

    #[test]
    fn first_insert_creates_leaf_root() {
        let mut tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
        assert_eq!(tree.insert(5, 50), None);

        let root = tree.root().unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.keys(), &[5]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    // Order 4: four keys fill the root leaf, the fifth splits it
    fn root_split_scenario_order_four() {
        let mut tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
        for key in [10, 20, 30, 40] {
            tree.insert(key, key);
        }

        let root = tree.root().unwrap();
        assert!(root.is_leaf());
        assert!(root.is_full());
        assert_eq!(root.keys(), &[10, 20, 30, 40]);

        tree.insert(50, 50);

        let root = tree.root().unwrap();
        assert!(!root.is_leaf());
        assert_eq!(root.keys(), &[30]);
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].keys(), &[10, 20]);
        assert_eq!(root.children()[1].keys(), &[30, 40, 50]);
        assert_eq!(tree.height(), 2);

        assert_eq!(tree.search(&30), Some(&30));
        assert_eq!(tree.search(&25), None);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn order_plus_one_keys_gives_height_two() {
        let mut tree: BPlusTree<u64, u64, 16> = BPlusTree::new();
        for key in 0..16u64 {
            tree.insert(key, key);
        }
        assert_eq!(tree.height(), 1);

        tree.insert(16, 16);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.stats().inner_nodes, 1);
        assert_eq!(tree.stats().leaf_nodes, 2);
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let mut tree: BPlusTree<u64, &str, 4> = BPlusTree::new();
        assert_eq!(tree.insert(5, "first"), None);
        assert_eq!(tree.insert(5, "second"), Some("first"));

        assert_eq!(tree.search(&5), Some(&"second"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn duplicate_separator_key_updates_leaf_value() {
        let mut tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
        for key in [10, 20, 30, 40, 50] {
            tree.insert(key, key);
        }
        // 30 is both a separator and a leaf key; the leaf copy is updated
        assert_eq!(tree.insert(30, 3000), Some(30));
        assert_eq!(tree.search(&30), Some(&3000));
        assert_eq!(tree.len(), 5);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn ascending_inserts_round_trip() {
        let mut tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
        for key in 0..2_000u64 {
            tree.insert(key * 2, key);
        }

        assert_eq!(tree.len(), 2_000);
        assert!(tree.check_invariants().is_ok());
        for key in 0..2_000u64 {
            assert_eq!(tree.search(&(key * 2)), Some(&key));
            // Odd keys were never inserted
            assert_eq!(tree.search(&(key * 2 + 1)), None);
        }
    }

    #[test]
    fn descending_inserts_round_trip() {
        let mut tree: BPlusTree<u64, u64, 5> = BPlusTree::new();
        for key in (0..1_500u64).rev() {
            tree.insert(key, key + 1);
            assert!(tree.check_invariants().is_ok());
        }
        for key in 0..1_500u64 {
            assert_eq!(tree.search(&key), Some(&(key + 1)));
        }
        assert_eq!(tree.search(&1_500), None);
    }

    #[test]
    fn shuffled_inserts_keep_invariants() {
        let mut keys: Vec<u64> = (0..5_000).collect();
        keys.shuffle(&mut StdRng::seed_from_u64(7));

        let mut tree: BPlusTree<u64, u64, 8> = BPlusTree::new();
        for &key in &keys {
            tree.insert(key, key * 10);
        }

        assert!(tree.check_invariants().is_ok());
        assert_eq!(tree.len(), keys.len());
        for &key in &keys {
            assert_eq!(tree.search(&key), Some(&(key * 10)));
        }
    }

    #[test]
    fn smallest_order_still_balances() {
        let mut tree: BPlusTree<u64, u64, 2> = BPlusTree::new();
        for key in 0..3_000u64 {
            tree.insert(key, key);
        }
        assert!(tree.check_invariants().is_ok());
        assert!(tree.height() > 2);
        assert!((0..3_000u64).all(|key| tree.contains_key(&key)));
    }

    #[test]
    fn stats_counts_nodes_and_fill() {
        let mut tree: BPlusTree<u64, u64, 4> = BPlusTree::new();
        for key in [10, 20, 30, 40, 50] {
            tree.insert(key, key);
        }

        let stats = tree.stats();
        assert_eq!(stats.total_keys, 5);
        assert_eq!(stats.leaf_nodes, 2);
        assert_eq!(stats.inner_nodes, 1);
        assert_eq!(stats.total_nodes(), 3);
        assert_eq!(stats.height, 2);
        assert_eq!(stats.leaf_slot_max, 4);
        assert!((stats.leaf_fill_ratio - 0.625).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_of_empty_tree() {
        let tree: BPlusTree<u64, u64, 8> = BPlusTree::new();
        let stats = tree.stats();
        assert_eq!(stats.total_nodes(), 0);
        assert_eq!(stats.height, 0);
        assert_eq!(stats.inner_slot_max, 8);
    }

    #[test]
    fn clear_releases_everything_and_tree_is_reusable() {
        let mut tree: BPlusTree<u64, u64, 3> = BPlusTree::new();
        for key in 0..10_000u64 {
            tree.insert(key, key);
        }
        assert!(tree.height() > 3);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_none());
        assert!(tree.check_invariants().is_ok());

        tree.insert(1, 1);
        assert_eq!(tree.search(&1), Some(&1));
    }

    /// Wraps a hand built root so the checker can be pointed at shapes
    /// `insert` never produces.
    fn hand_built(root: BTreeNode<u64, u64, 4>, len: usize, height: usize) -> BPlusTree<u64, u64, 4> {
        BPlusTree::from_parts(Box::new(root), len, height)
    }

    #[test]
    fn checker_reports_uneven_leaf_depth() {
        // One child of the root is a leaf, the other an inner node
        let deep = BTreeNode::inner_with(
            30,
            Box::new(BTreeNode::leaf_with(20, 20)),
            Box::new(BTreeNode::leaf_with(30, 30)),
        );
        let root = BTreeNode::inner_with(20, Box::new(BTreeNode::leaf_with(10, 10)), Box::new(deep));

        assert_eq!(
            hand_built(root, 3, 3).check_invariants(),
            Err(InvariantViolation::UnevenLeafDepth { expected: 2, found: 1 })
        );
    }

    #[test]
    fn checker_reports_unsorted_keys() {
        let mut leaf: BTreeNode<u64, u64, 4> = BTreeNode::new_leaf();
        if let BTreeNode::Leaf { keys, values } = &mut leaf {
            keys.extend([3, 1]);
            values.extend([30, 10]);
        }
        assert_eq!(
            hand_built(leaf, 2, 1).check_invariants(),
            Err(InvariantViolation::UnsortedKeys { depth: 0, position: 1 })
        );
    }

    #[test]
    fn checker_reports_key_outside_separator_range() {
        // 15 sits right of separator 20
        let root = BTreeNode::inner_with(
            20,
            Box::new(BTreeNode::leaf_with(10, 10)),
            Box::new(BTreeNode::leaf_with(15, 15)),
        );
        assert_eq!(
            hand_built(root, 2, 2).check_invariants(),
            Err(InvariantViolation::SeparatorRange { depth: 1 })
        );
    }

    #[test]
    fn checker_reports_wrong_length() {
        let tree = hand_built(BTreeNode::leaf_with(1, 1), 5, 1);
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::LengthMismatch { recorded: 5, counted: 1 })
        );
    }

    #[test]
    fn checker_reports_overfull_node() {
        // Five keys in an order-4 leaf
        let mut leaf: BTreeNode<u64, u64, 4> = BTreeNode::new_leaf();
        if let BTreeNode::Leaf { keys, values } = &mut leaf {
            keys.extend([1, 2, 3, 4, 5]);
            values.extend([10, 20, 30, 40, 50]);
        }
        assert_eq!(
            hand_built(leaf, 5, 1).check_invariants(),
            Err(InvariantViolation::Overflow { depth: 0, count: 5, order: 4 })
        );
    }

    #[test]
    fn checker_reports_missing_value() {
        let mut leaf: BTreeNode<u64, u64, 4> = BTreeNode::new_leaf();
        if let BTreeNode::Leaf { keys, values } = &mut leaf {
            keys.extend([1, 2]);
            values.push(10);
        }
        assert_eq!(
            hand_built(leaf, 2, 1).check_invariants(),
            Err(InvariantViolation::ValueCountMismatch { depth: 0, keys: 2, values: 1 })
        );
    }

    #[test]
    fn checker_reports_extra_child() {
        // One separator but three children
        let mut root = BTreeNode::inner_with(
            20,
            Box::new(BTreeNode::leaf_with(10, 10)),
            Box::new(BTreeNode::leaf_with(30, 30)),
        );
        if let BTreeNode::Inner { children, .. } = &mut root {
            children.push(Box::new(BTreeNode::leaf_with(40, 40)));
        }
        assert_eq!(
            hand_built(root, 3, 2).check_invariants(),
            Err(InvariantViolation::ChildCountMismatch { depth: 0, keys: 1, children: 3 })
        );
    }

    #[test]
    fn checker_reports_wrong_height() {
        let tree = hand_built(BTreeNode::leaf_with(1, 1), 1, 3);
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::HeightMismatch { recorded: 3, counted: 1 })
        );
    }
}
