//! Read-only structural queries. Every query takes the root of the (sub)tree to inspect, so they
//! work the same on the primary tree, a subtree, or a detached tree sharing the arena. Nothing is
//! cached: heights and sizes are recomputed by walking the nodes.
//!
//! The walks use explicit stacks or queues rather than recursion, so a degenerate (list shaped)
//! search tree can't exhaust the call stack.

use std::collections::HashMap;

use crate::error::Result;
use crate::node::NodeId;
use crate::tree::Tree;

impl Tree {
    /// The number of edges on the longest downward path from `from`. A leaf and an empty tree
    /// both have height 0.
    pub fn height(&self, from: impl Into<Option<NodeId>>) -> usize {
        self.levels(from.into()).saturating_sub(1)
    }

    /// The number of nodes on the longest downward path from `from`, or 0 for no node. This is
    /// what balance factors compare, so a missing child and a leaf child differ.
    pub(crate) fn levels(&self, from: Option<NodeId>) -> usize {
        let Some(start) = from.filter(|id| self.contains(*id)) else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(start, 1)];
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = self.node(id);
            stack.extend(node.left.map(|child| (child, level + 1)));
            stack.extend(node.right.map(|child| (child, level + 1)));
        }
        deepest
    }

    /// The number of edges between `id` and the root of its tree.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.node_parent(id);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.node(parent).parent;
        }
        depth
    }

    /// The number of nodes below and including `from`.
    pub fn size(&self, from: impl Into<Option<NodeId>>) -> usize {
        self.preorder_ids(from.into()).count()
    }

    /// The number of nodes without children.
    pub fn leaf_count(&self, from: impl Into<Option<NodeId>>) -> usize {
        self.preorder_ids(from.into())
            .filter(|id| self.node(*id).is_leaf())
            .count()
    }

    /// The number of nodes with at least one child.
    pub fn branch_node_count(&self, from: impl Into<Option<NodeId>>) -> usize {
        self.preorder_ids(from.into())
            .filter(|id| !self.node(*id).is_leaf())
            .count()
    }

    /// Left subtree height minus right subtree height. Positive means left heavy.
    pub fn balance_factor(&self, from: impl Into<Option<NodeId>>) -> isize {
        let from: Option<NodeId> = from.into();
        match from.and_then(|id| self.get(id)) {
            Some(node) => self.levels(node.left) as isize - self.levels(node.right) as isize,
            None => 0,
        }
    }

    /// Whether every node has either zero or two children.
    pub fn is_full(&self, from: impl Into<Option<NodeId>>) -> bool {
        let from: Option<NodeId> = from.into();
        from.map_or(false, |id| self.contains(id))
            && self
                .preorder_ids(from)
                .all(|id| self.node(id).child_count() != 1)
    }

    /// Whether every internal node has two children and every leaf sits at the same depth.
    pub fn is_perfect(&self, from: impl Into<Option<NodeId>>) -> bool {
        let from: Option<NodeId> = from.into();
        let Some(start) = from.filter(|id| self.contains(*id)) else {
            return false;
        };

        // Any leaf will do as the reference, take the one found by always going left if possible.
        let mut leaf_depth = 0;
        let mut cursor = start;
        while let Some(next) = self.node(cursor).left.or(self.node(cursor).right) {
            cursor = next;
            leaf_depth += 1;
        }

        let mut stack = vec![(start, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            match (node.left, node.right) {
                (None, None) if depth != leaf_depth => return false,
                (None, None) => {}
                (Some(left), Some(right)) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                _ => return false,
            }
        }
        true
    }

    /// Whether every level is full except possibly the last, which fills left to right.
    ///
    /// Walks breadth first; once a missing child has been seen, any later child means a gap.
    pub fn is_complete(&self, from: impl Into<Option<NodeId>>) -> Result<bool> {
        let from: Option<NodeId> = from.into();
        if !from.map_or(false, |id| self.contains(id)) {
            return Ok(false);
        }

        let mut gap_seen = false;
        self.level_order_ids(from, |tree, id| {
            let node = tree.node(id);
            for child in [node.left, node.right] {
                match child {
                    Some(_) if gap_seen => return false,
                    Some(_) => {}
                    None => gap_seen = true,
                }
            }
            true
        })
    }

    /// Whether keys are strictly ordered: everything left of a node is smaller, everything right
    /// of it is larger.
    pub fn is_bst(&self, from: impl Into<Option<NodeId>>) -> bool {
        let from: Option<NodeId> = from.into();
        let Some(start) = from.filter(|id| self.contains(*id)) else {
            return false;
        };

        // Each node inherits an open interval (lower, upper) from its ancestors.
        let mut stack: Vec<(NodeId, Option<i32>, Option<i32>)> = vec![(start, None, None)];
        while let Some((id, lower, upper)) = stack.pop() {
            let node = self.node(id);
            if lower.map_or(false, |lower| node.key <= lower)
                || upper.map_or(false, |upper| node.key >= upper)
            {
                return false;
            }
            stack.extend(node.left.map(|left| (left, lower, Some(node.key))));
            stack.extend(node.right.map(|right| (right, Some(node.key), upper)));
        }
        true
    }

    /// Whether this is a search tree where no node's subtrees differ in height by more than one.
    pub fn is_avl(&self, from: impl Into<Option<NodeId>>) -> bool {
        let from: Option<NodeId> = from.into();
        if !self.is_bst(from) {
            return false;
        }

        // Reverse preorder sees every child before its parent.
        let order: Vec<NodeId> = self.preorder_ids(from).collect();
        let mut levels: HashMap<NodeId, usize> = HashMap::with_capacity(order.len());
        for id in order.into_iter().rev() {
            let node = self.node(id);
            let left = node.left.map_or(0, |left| levels[&left]);
            let right = node.right.map_or(0, |right| levels[&right]);
            if left.abs_diff(right) > 1 {
                return false;
            }
            levels.insert(id, left.max(right) + 1);
        }
        true
    }

    /// Whether the tree is complete and no child holds a larger key than its parent.
    pub fn is_heap(&self, from: impl Into<Option<NodeId>>) -> Result<bool> {
        let from: Option<NodeId> = from.into();
        if !self.is_complete(from)? {
            return Ok(false);
        }
        Ok(self.preorder_ids(from).all(|id| {
            let node = self.node(id);
            [node.left, node.right]
                .into_iter()
                .flatten()
                .all(|child| self.node(child).key <= node.key)
        }))
    }

    /// The deepest node that has both `first` and `second` as descendants (a node counts as its
    /// own descendant). Returns `None` if either id is dead or they live in different trees.
    pub fn lowest_common_ancestor(&self, first: NodeId, second: NodeId) -> Option<NodeId> {
        if !self.contains(first) || !self.contains(second) {
            return None;
        }

        let (mut first, mut second) = (first, second);
        let (mut first_depth, mut second_depth) = (self.depth(first), self.depth(second));
        while first_depth > second_depth {
            first = self.node(first).parent?;
            first_depth -= 1;
        }
        while second_depth > first_depth {
            second = self.node(second).parent?;
            second_depth -= 1;
        }

        while first != second {
            // Running out of parents here means we reached two different roots.
            first = self.node(first).parent?;
            second = self.node(second).parent?;
        }
        Some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///          10
    ///        /    \
    ///       5      15
    ///      / \    /  \
    ///     3   7  12   18
    /// ```
    fn perfect() -> (Tree, Vec<NodeId>) {
        let mut tree = Tree::new();
        let root = tree.new_node(10).unwrap();
        let n5 = tree.insert_left(root, 5).unwrap();
        let n15 = tree.insert_right(root, 15).unwrap();
        let n3 = tree.insert_left(n5, 3).unwrap();
        let n7 = tree.insert_right(n5, 7).unwrap();
        let n12 = tree.insert_left(n15, 12).unwrap();
        let n18 = tree.insert_right(n15, 18).unwrap();
        (tree, vec![root, n5, n15, n3, n7, n12, n18])
    }

    #[test]
    fn empty_tree_is_neutral() {
        let tree = Tree::new();
        assert_eq!(tree.height(tree.root()), 0);
        assert_eq!(tree.size(tree.root()), 0);
        assert_eq!(tree.leaf_count(tree.root()), 0);
        assert_eq!(tree.branch_node_count(tree.root()), 0);
        assert_eq!(tree.balance_factor(tree.root()), 0);
        assert!(!tree.is_full(tree.root()));
        assert!(!tree.is_perfect(tree.root()));
        assert!(!tree.is_complete(tree.root()).unwrap());
        assert!(!tree.is_bst(tree.root()));
        assert!(!tree.is_avl(tree.root()));
        assert!(!tree.is_heap(tree.root()).unwrap());
    }

    #[test]
    fn counts_and_heights() {
        let (tree, ids) = perfect();
        let root = tree.root();

        assert_eq!(tree.size(root), 7);
        assert_eq!(tree.leaf_count(root), 4);
        assert_eq!(tree.branch_node_count(root), 3);
        assert_eq!(tree.height(root), 2);
        assert_eq!(tree.height(ids[1]), 1);
        assert_eq!(tree.height(ids[3]), 0);
        assert_eq!(tree.depth(ids[0]), 0);
        assert_eq!(tree.depth(ids[6]), 2);
        assert_eq!(tree.balance_factor(root), 0);
    }

    #[test]
    fn balance_factor_counts_missing_child_as_empty() {
        let mut tree = Tree::new();
        let root = tree.new_node(3).unwrap();
        let left = tree.insert_left(root, 2).unwrap();
        tree.insert_left(left, 1).unwrap();

        assert_eq!(tree.balance_factor(root), 2);
        assert_eq!(tree.balance_factor(left), 1);
    }

    #[test]
    fn shape_predicates() {
        let (mut tree, ids) = perfect();
        let root = tree.root();
        assert!(tree.is_full(root));
        assert!(tree.is_perfect(root));
        assert!(tree.is_complete(root).unwrap());

        // Give 3 a single child: no longer full, perfect, or complete.
        tree.insert_left(ids[3], 1).unwrap();
        assert!(!tree.is_full(root));
        assert!(!tree.is_perfect(root));
        assert!(tree.is_complete(root).unwrap());

        tree.insert_left(ids[6], 17).unwrap();
        assert!(!tree.is_complete(root).unwrap());
    }

    #[test]
    fn right_child_without_left_is_not_complete() {
        let mut tree = Tree::new();
        let root = tree.new_node(1).unwrap();
        tree.insert_right(root, 2).unwrap();

        assert!(!tree.is_complete(root).unwrap());
    }

    #[test]
    fn right_child_without_left_below_root_is_not_complete() {
        //       1
        //     /   \
        //    2     3
        //     \
        //      5
        let mut tree = Tree::new();
        let root = tree.new_node(1).unwrap();
        let left = tree.insert_left(root, 2).unwrap();
        tree.insert_right(root, 3).unwrap();
        tree.insert_right(left, 5).unwrap();

        assert!(!tree.is_complete(root).unwrap());
        assert!(!tree.is_complete(left).unwrap());

        // Filling the gap on the left makes it complete again.
        tree.insert_left(left, 4).unwrap();
        assert!(tree.is_complete(root).unwrap());
    }

    #[test]
    fn full_but_not_perfect() {
        let mut tree = Tree::new();
        let root = tree.new_node(1).unwrap();
        let left = tree.insert_left(root, 2).unwrap();
        tree.insert_right(root, 3).unwrap();
        tree.insert_left(left, 4).unwrap();
        tree.insert_right(left, 5).unwrap();

        assert!(tree.is_full(root));
        assert!(!tree.is_perfect(root));
    }

    #[test]
    fn bst_and_avl_checks() {
        let (mut tree, ids) = perfect();
        assert!(tree.is_bst(tree.root()));
        assert!(tree.is_avl(tree.root()));

        // 11 sits between 10 and 12 so the order still holds.
        tree.insert_left(ids[5], 11).unwrap();
        assert!(tree.is_bst(tree.root()));

        // 9 lands in the right subtree of 10.
        tree.insert_left(ids[5], 9).unwrap();
        assert!(!tree.is_bst(tree.root()));
    }

    #[test]
    fn unbalanced_search_tree_is_not_avl() {
        let mut tree = Tree::new();
        let root = tree.new_node(1).unwrap();
        let two = tree.insert_right(root, 2).unwrap();
        tree.insert_right(two, 3).unwrap();

        assert!(tree.is_bst(root));
        assert!(!tree.is_avl(root));
    }

    #[test]
    fn heap_check() {
        let mut tree = Tree::new();
        let root = tree.new_node(98).unwrap();
        let left = tree.insert_left(root, 90).unwrap();
        tree.insert_right(root, 85).unwrap();
        tree.insert_left(left, 79).unwrap();
        assert!(tree.is_heap(root).unwrap());

        tree.insert_right(left, 95).unwrap();
        assert!(!tree.is_heap(root).unwrap());
    }

    #[test]
    fn lowest_common_ancestor_of_cousins_and_self() {
        let (tree, ids) = perfect();
        let (n5, n15, n3, n7, n12) = (ids[1], ids[2], ids[3], ids[4], ids[5]);

        assert_eq!(tree.lowest_common_ancestor(n3, n7), Some(n5));
        assert_eq!(tree.lowest_common_ancestor(n3, n12), Some(ids[0]));
        assert_eq!(tree.lowest_common_ancestor(n15, n12), Some(n15));
        assert_eq!(tree.lowest_common_ancestor(n7, n7), Some(n7));
    }

    #[test]
    fn lowest_common_ancestor_across_trees() {
        let (mut tree, ids) = perfect();
        let other_root = tree.new_node(100).unwrap();
        let other_leaf = tree.insert_left(other_root, 50).unwrap();

        assert_eq!(tree.lowest_common_ancestor(ids[3], other_leaf), None);
        assert_eq!(tree.lowest_common_ancestor(ids[0], other_root), None);
    }
}
