//! An arena of [`Node`]s plus the plain, unordered binary tree operations.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.new_node(98).unwrap();
//! let left = tree.insert_left(root, 12).unwrap();
//! tree.insert_right(root, 402).unwrap();
//!
//! // Inserting into an occupied slot pushes the old child down a level.
//! let between = tree.insert_left(root, 54).unwrap();
//! assert_eq!(tree.get(between).unwrap().left(), Some(left));
//!
//! let mut keys = Vec::new();
//! tree.preorder(tree.root(), |key| keys.push(key));
//! assert_eq!(keys, [98, 54, 12, 402]);
//! ```

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::node::{Node, NodeId, Side};

/// Owner of every node. A `Tree` has an optional primary root that the ordered engines work on;
/// detached nodes made with [`Tree::new_node`] after the root exists start trees of their own in
/// the same arena.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    // `None` marks a freed slot waiting in `free` for reuse.
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
        }
    }

    /// Generate an empty `Tree` with room for `capacity` nodes before the arena grows.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the room can't be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        #[cfg(test)]
        let capacity = reserve_limit::apply(capacity);

        let mut tree = Self::new();
        tree.slots.try_reserve_exact(capacity)?;
        tree.free.try_reserve_exact(capacity)?;
        Ok(tree)
    }

    /// The primary root, or `None` when the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Whether the primary tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Looks up a live node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// The key stored at `id`, if it is live.
    pub fn key(&self, id: NodeId) -> Option<i32> {
        self.get(id).map(Node::key)
    }

    /// Whether `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes across the whole arena, detached trees included.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Allocates a detached node holding `key`. If the tree was empty the node becomes its root.
    pub fn new_node(&mut self, key: i32) -> Result<NodeId> {
        let id = self.alloc(None, key)?;
        if self.root.is_none() {
            self.root = Some(id);
        }
        Ok(id)
    }

    /// Creates a node as the left child of `parent`. If `parent` already has a left child, that
    /// child becomes the left child of the new node.
    pub fn insert_left(&mut self, parent: NodeId, key: i32) -> Result<NodeId> {
        self.insert_child(parent, Side::Left, key)
    }

    /// Creates a node as the right child of `parent`. If `parent` already has a right child, that
    /// child becomes the right child of the new node.
    pub fn insert_right(&mut self, parent: NodeId, key: i32) -> Result<NodeId> {
        self.insert_child(parent, Side::Right, key)
    }

    fn insert_child(&mut self, parent: NodeId, side: Side, key: i32) -> Result<NodeId> {
        let old_child = self.get(parent).ok_or(Error::InvalidNode(parent))?.child(side);
        let id = self.alloc(Some(parent), key)?;

        if let Some(old_child) = old_child {
            *self.node_mut(id).child_mut(side) = Some(old_child);
            self.node_mut(old_child).parent = Some(id);
        }
        *self.node_mut(parent).child_mut(side) = Some(id);
        Ok(id)
    }

    /// Frees `id` and every node below it, detaching it from its parent first. Deleting the
    /// primary root empties the tree.
    pub fn delete_tree(&mut self, id: NodeId) -> Result<()> {
        let node = self.get(id).ok_or(Error::InvalidNode(id))?;
        let parent = node.parent;
        self.replace_child(parent, id, None);

        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            stack.extend(node.left);
            stack.extend(node.right);
            self.free_node(id);
        }
        Ok(())
    }

    /// The other child of `id`'s parent.
    pub fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node_parent(id)?;
        let parent = self.node(parent);
        if parent.left == Some(id) {
            parent.right
        } else {
            parent.left
        }
    }

    /// The sibling of `id`'s parent.
    pub fn uncle(&self, id: NodeId) -> Option<NodeId> {
        self.sibling(self.node_parent(id)?)
    }

    /// Whether `id` is a live node with no children.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.get(id).map_or(false, Node::is_leaf)
    }

    /// Whether `id` is a live node with no parent.
    pub fn is_root(&self, id: NodeId) -> bool {
        self.get(id).map_or(false, Node::is_root)
    }

    /// Which slot of its parent `id` occupies, or `None` for a root.
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.node(self.node_parent(id)?);
        if parent.left == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Visits keys node, left subtree, right subtree.
    pub fn preorder(&self, from: impl Into<Option<NodeId>>, mut visit: impl FnMut(i32)) {
        for id in self.preorder_ids(from.into()) {
            visit(self.node(id).key);
        }
    }

    /// Visits keys left subtree, node, right subtree. For a search tree this is ascending order.
    pub fn inorder(&self, from: impl Into<Option<NodeId>>, mut visit: impl FnMut(i32)) {
        let from: Option<NodeId> = from.into();
        let mut stack = Vec::new();
        let mut cursor = from.filter(|id| self.contains(*id));
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self.node(id).left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let node = self.node(id);
            visit(node.key);
            cursor = node.right;
        }
    }

    /// Visits keys left subtree, right subtree, node.
    pub fn postorder(&self, from: impl Into<Option<NodeId>>, mut visit: impl FnMut(i32)) {
        // Node-right-left preorder, reversed, is left-right-node.
        let from: Option<NodeId> = from.into();
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = from.filter(|id| self.contains(*id)).into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            order.push(node.key);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        for key in order.into_iter().rev() {
            visit(key);
        }
    }

    /// Visits keys breadth first, each level left to right.
    ///
    /// The pending queue grows fallibly, so running out of memory surfaces as
    /// [`Error::AllocationFailure`] instead of aborting.
    pub fn level_order(
        &self,
        from: impl Into<Option<NodeId>>,
        mut visit: impl FnMut(i32),
    ) -> Result<()> {
        self.level_order_ids(from.into(), |tree, id| {
            visit(tree.node(id).key);
            true
        })
        .map(|_| ())
    }

    /// Collects the keys below `from` in ascending (in-order) position.
    pub fn inorder_keys(&self, from: impl Into<Option<NodeId>>) -> Vec<i32> {
        let mut keys = Vec::new();
        self.inorder(from, |key| keys.push(key));
        keys
    }

    /// Breadth-first walk over ids. `visit` returning `false` stops the walk early and makes this
    /// return `Ok(false)`.
    pub(crate) fn level_order_ids(
        &self,
        from: Option<NodeId>,
        mut visit: impl FnMut(&Self, NodeId) -> bool,
    ) -> Result<bool> {
        let Some(start) = from.filter(|id| self.contains(*id)) else {
            return Ok(true);
        };
        let mut queue = VecDeque::new();
        queue.try_reserve(1)?;
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            if !visit(self, id) {
                return Ok(false);
            }
            let node = self.node(id);
            queue.try_reserve(node.child_count())?;
            queue.extend(node.left);
            queue.extend(node.right);
        }
        Ok(true)
    }

    /// Iterates over the ids below `from` in preorder.
    pub(crate) fn preorder_ids(&self, from: Option<NodeId>) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: from.filter(|id| self.contains(*id)).into_iter().collect(),
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("NodeId refers to a freed slot")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("NodeId refers to a freed slot")
    }

    pub(crate) fn node_parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Allocates a node whose parent back-reference is `parent`. The caller links it in.
    ///
    /// Any growth of the arena happens here, before the caller touches the structure, so an
    /// allocation failure never leaves a half-linked node behind.
    pub(crate) fn alloc(&mut self, parent: Option<NodeId>, key: i32) -> Result<NodeId> {
        let node = Node::new(parent, key);
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Some(node);
            log::trace!("reused slot {} for key {}", id.0, key);
            return Ok(id);
        }

        self.slots.try_reserve(1)?;
        // Keep room to free every slot later without allocating.
        self.free.try_reserve(self.slots.len() + 1 - self.free.len())?;
        let id = NodeId(self.slots.len());
        self.slots.push(Some(node));
        log::trace!("allocated slot {} for key {}", id.0, key);
        Ok(id)
    }

    /// Releases a node's slot. Every link to it must already have been repaired.
    pub(crate) fn free_node(&mut self, id: NodeId) {
        if let Some(node) = self.slots[id.0].take() {
            log::trace!("freed slot {} holding key {}", id.0, node.key);
            if self.root == Some(id) {
                self.root = None;
            }
            self.free.push(id);
        }
    }

    /// Points whatever referenced `old` (its parent's child slot, or the primary root) at `new`,
    /// and sets `new`'s back-reference to match.
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let parent_node = self.node_mut(parent);
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    parent_node.right = new;
                }
            }
            None if self.root == Some(old) => self.root = new,
            None => {}
        }
        if let Some(new) = new {
            self.node_mut(new).parent = parent;
        }
    }
}

/// A stack based preorder walk over node ids.
pub(crate) struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Right first so left pops first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(id)
    }
}
