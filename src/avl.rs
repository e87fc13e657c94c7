//! A self-balancing Binary Search Tree (specifically, an AVL tree) built on the shared node
//! arena. Heights are not stored in the nodes; they are recomputed from the structure whenever a
//! balance factor is needed.
//!
//! # Examples
//!
//! ```
//! use bintree::avl::Avl;
//!
//! let mut tree = Avl::new();
//! for key in 1..=7 {
//!     tree.insert(key).unwrap();
//! }
//!
//! // Ascending inserts would make a plain search tree a list; this one stays shallow.
//! assert_eq!(tree.tree().height(tree.root()), 2);
//! assert!(tree.tree().is_avl(tree.root()));
//!
//! tree.remove(4).unwrap();
//! assert_eq!(tree.keys(), [1, 2, 3, 5, 6, 7]);
//! ```

use crate::error::{Error, Result};
use crate::node::{NodeId, Side};
use crate::tree::Tree;

/// A search tree where the heights of every node's two subtrees differ by at most one.
#[derive(Clone, Debug, Default)]
pub struct Avl {
    tree: Tree,
}

impl Avl {
    /// Generate a new, empty `Avl`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The root node, or `None` when empty. Rebalancing may change it after any insert or
    /// remove.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    /// The underlying tree, for structural queries and traversals.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Gives up the balancing guarantees and returns the plain tree.
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

    /// Inserts `key`, rebalancing if needed, and returns the node holding it.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if the key is already present, or [`Error::AllocationFailure`].
    /// The tree is unchanged in both cases.
    pub fn insert(&mut self, key: i32) -> Result<NodeId> {
        let id = self.tree.avl_insert(key)?;
        self.check_invariants();
        Ok(id)
    }

    /// Finds the node holding `key`.
    pub fn search(&self, key: i32) -> Option<NodeId> {
        self.tree.bst_search(key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// Removes `key`, rebalancing every ancestor that needs it, and returns the new root.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` isn't present.
    pub fn remove(&mut self, key: i32) -> Result<Option<NodeId>> {
        let root = self.tree.avl_remove(key)?;
        self.check_invariants();
        Ok(root)
    }

    /// Collects the keys in ascending order.
    pub fn keys(&self) -> Vec<i32> {
        self.tree.inorder_keys(self.tree.root())
    }

    fn check_invariants(&self) {
        // In debug builds, after balancing, assert that we've restored/maintained the invariant.
        if cfg!(debug_assertions) && !self.tree.is_empty() {
            assert!(self.tree.is_avl(self.tree.root()));
        }
    }
}

/// Builds a balanced tree from strictly ascending `keys` without any rotations: the lower middle
/// key of each range becomes the root of that range's subtree.
///
/// # Errors
///
/// [`Error::NotSorted`] if a key is not larger than the one before it.
pub fn sorted_array_to_avl(keys: &[i32]) -> Result<Avl> {
    if let Some(index) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
        return Err(Error::NotSorted { index: index + 1 });
    }

    let mut tree = Tree::with_capacity(keys.len())?;
    if !keys.is_empty() {
        let middle = (keys.len() - 1) / 2;
        let root = tree.new_node(keys[middle])?;
        build_sorted(&mut tree, root, Side::Left, &keys[..middle])?;
        build_sorted(&mut tree, root, Side::Right, &keys[middle + 1..])?;
    }
    log::debug!("built balanced tree from {} sorted keys", keys.len());
    Ok(Avl { tree })
}

/// Hangs the subtree for `keys` off `parent` on `side`.
fn build_sorted(tree: &mut Tree, parent: NodeId, side: Side, keys: &[i32]) -> Result<()> {
    if keys.is_empty() {
        return Ok(());
    }
    let middle = (keys.len() - 1) / 2;
    let id = match side {
        Side::Left => tree.insert_left(parent, keys[middle])?,
        Side::Right => tree.insert_right(parent, keys[middle])?,
    };
    build_sorted(tree, id, Side::Left, &keys[..middle])?;
    build_sorted(tree, id, Side::Right, &keys[middle + 1..])
}

/// Builds a balanced tree by inserting `keys` one at a time. Duplicate keys are skipped.
pub fn array_to_avl(keys: &[i32]) -> Result<Avl> {
    let mut avl = Avl {
        tree: Tree::with_capacity(keys.len())?,
    };
    for &key in keys {
        match avl.insert(key) {
            Ok(_) | Err(Error::DuplicateKey(_)) => {}
            Err(e) => return Err(e),
        }
    }
    log::debug!("built balanced tree of {} nodes from {} keys", avl.len(), keys.len());
    Ok(avl)
}

impl Tree {
    /// Search tree insert followed by a walk up from the new leaf. Only the lowest ancestor that
    /// went out of balance needs fixing: the rotation brings that subtree back to its height from
    /// before the insert, so nothing above it changes.
    pub(crate) fn avl_insert(&mut self, key: i32) -> Result<NodeId> {
        let id = self.bst_insert(key)?;

        let mut cursor = self.node(id).parent;
        while let Some(ancestor) = cursor {
            let balance = self.balance_factor(ancestor);
            if balance.abs() > 1 {
                let heavy = if balance > 0 { Side::Left } else { Side::Right };
                let child = self.child_on(ancestor, heavy)?;
                // The new key went to the inner grandchild when it lies between child and
                // ancestor.
                let inner = match heavy {
                    Side::Left => key > self.node(child).key,
                    Side::Right => key < self.node(child).key,
                };
                self.restore_balance(ancestor, heavy, inner)?;
                break;
            }
            cursor = self.node(ancestor).parent;
        }
        Ok(id)
    }

    /// Search tree delete followed by a walk from the unlinked node's parent all the way to the
    /// root. Unlike insertion, a rotation can shorten the subtree and unbalance an ancestor, so
    /// every level is checked.
    pub(crate) fn avl_remove(&mut self, key: i32) -> Result<Option<NodeId>> {
        let Some(node) = self.bst_search(key) else {
            log::debug!("remove of missing key {}", key);
            return Err(Error::KeyNotFound(key));
        };

        let mut cursor = self.bst_delete(node);
        while let Some(id) = cursor {
            let balance = self.balance_factor(id);
            let subtree_root = if balance.abs() > 1 {
                let heavy = if balance > 0 { Side::Left } else { Side::Right };
                let child = self.child_on(id, heavy)?;
                let child_balance = self.balance_factor(child);
                let inner = match heavy {
                    Side::Left => child_balance < 0,
                    Side::Right => child_balance > 0,
                };
                self.restore_balance(id, heavy, inner)?
            } else {
                id
            };
            cursor = self.node(subtree_root).parent;
        }
        Ok(self.root())
    }

    /// Fixes a node whose `heavy` subtree is two levels taller than the other, returning the new
    /// subtree root. An `inner` imbalance (left-right or right-left) first rotates the heavy
    /// child so the problem becomes an outer one.
    fn restore_balance(&mut self, id: NodeId, heavy: Side, inner: bool) -> Result<NodeId> {
        log::trace!(
            "rebalancing {:?}: {} heavy, {} case",
            id,
            heavy,
            if inner { "inner" } else { "outer" }
        );
        if inner {
            let child = self.child_on(id, heavy)?;
            self.rotate(child, heavy.opposite())?;
        }
        self.rotate(id, heavy)
    }

    fn child_on(&self, id: NodeId, side: Side) -> Result<NodeId> {
        self.node(id).child(side).ok_or(Error::InvalidRotation {
            node: id,
            missing: side,
        })
    }
}
