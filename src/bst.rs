//! An unbalanced Binary Search Tree built on the shared node arena.
//!
//! # Examples
//!
//! ```
//! use bintree::bst::Bst;
//! use bintree::Error;
//!
//! let mut tree = Bst::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(1), None);
//!
//! let one = tree.insert(1).unwrap();
//! assert_eq!(tree.search(1), Some(one));
//!
//! // Keys are unique, a second insert is rejected and changes nothing.
//! assert!(matches!(tree.insert(1), Err(Error::DuplicateKey(1))));
//!
//! tree.remove(1).unwrap();
//! assert_eq!(tree.search(1), None);
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::node::{NodeId, Side};
use crate::tree::Tree;

/// A Binary Search Tree with unique `i32` keys. Every node's key is larger than all keys in its
/// left subtree and smaller than all keys in its right subtree.
#[derive(Clone, Debug, Default)]
pub struct Bst {
    tree: Tree,
}

impl Bst {
    /// Generate a new, empty `Bst`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The root node, or `None` when empty.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    /// The underlying tree, for structural queries and traversals.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Gives up the ordering guarantees and returns the plain tree.
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// The number of nodes.
    pub fn len(&self) -> usize {
        self.tree.size(self.tree.root())
    }

    /// Whether there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Inserts `key` and returns its new node.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if the key is already present, or [`Error::AllocationFailure`].
    /// The tree is unchanged in both cases.
    pub fn insert(&mut self, key: i32) -> Result<NodeId> {
        self.tree.bst_insert(key)
    }

    /// Finds the node holding `key`.
    pub fn search(&self, key: i32) -> Option<NodeId> {
        self.tree.bst_search(key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// Deletes `node` from the tree and returns the (possibly new) root.
    ///
    /// A node with two children takes the key of its in-order successor and the successor's node
    /// is removed instead, so ids other than `node`'s may be freed.
    pub fn delete(&mut self, node: NodeId) -> Result<Option<NodeId>> {
        if !self.tree.contains(node) {
            return Err(Error::InvalidNode(node));
        }
        self.tree.bst_delete(node);
        Ok(self.tree.root())
    }

    /// Deletes the node holding `key` and returns the (possibly new) root.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` isn't present.
    pub fn remove(&mut self, key: i32) -> Result<Option<NodeId>> {
        let Some(node) = self.search(key) else {
            log::debug!("remove of missing key {}", key);
            return Err(Error::KeyNotFound(key));
        };
        self.delete(node)
    }

    /// Collects the keys in ascending order.
    pub fn keys(&self) -> Vec<i32> {
        self.tree.inorder_keys(self.tree.root())
    }
}

/// Builds a search tree by inserting `keys` in order. Duplicate keys are skipped.
pub fn array_to_bst(keys: &[i32]) -> Result<Bst> {
    let mut bst = Bst {
        tree: Tree::with_capacity(keys.len())?,
    };
    for &key in keys {
        match bst.insert(key) {
            Ok(_) | Err(Error::DuplicateKey(_)) => {}
            Err(e) => return Err(e),
        }
    }
    log::debug!("built search tree of {} nodes from {} keys", bst.len(), keys.len());
    Ok(bst)
}

impl Tree {
    /// Walks down from the root comparing keys.
    pub(crate) fn bst_search(&self, key: i32) -> Option<NodeId> {
        let mut cursor = self.root();
        while let Some(id) = cursor {
            let node = self.node(id);
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Attaches a new leaf holding `key` where a search for it would fall off the tree.
    pub(crate) fn bst_insert(&mut self, key: i32) -> Result<NodeId> {
        let Some(mut cursor) = self.root() else {
            return self.new_node(key);
        };

        let (parent, side) = loop {
            let node = self.node(cursor);
            let side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal => {
                    log::debug!("rejected duplicate key {}", key);
                    return Err(Error::DuplicateKey(key));
                }
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => cursor = child,
                None => break (cursor, side),
            }
        };

        let id = self.alloc(Some(parent), key)?;
        *self.node_mut(parent).child_mut(side) = Some(id);
        Ok(id)
    }

    /// Removes `node`, returning the parent of the node that was physically unlinked (which is
    /// where any rebalancing has to start).
    ///
    /// With at most one child the node is spliced out and its child takes its slot. With two
    /// children the in-order successor's key is copied into `node` and the successor, which has
    /// no left child, is spliced out instead.
    pub(crate) fn bst_delete(&mut self, node: NodeId) -> Option<NodeId> {
        let current = self.node(node);
        let (left, right, parent) = (current.left, current.right, current.parent);

        let spliced = match (left, right) {
            (None, child) | (child, None) => {
                self.replace_child(parent, node, child);
                self.free_node(node);
                return parent;
            }
            (Some(_), Some(right)) => {
                let mut successor = right;
                while let Some(left) = self.node(successor).left {
                    successor = left;
                }
                successor
            }
        };

        let successor_key = self.node(spliced).key;
        log::trace!(
            "replacing key {} with successor {}",
            self.node(node).key,
            successor_key
        );
        self.node_mut(node).key = successor_key;
        self.bst_delete(spliced)
    }
}
