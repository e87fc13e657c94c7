//! A binary max-heap made of linked nodes instead of an array.
//!
//! The tree is kept complete, so every node still has an implicit 1-based level-order position
//! like an array slot would. That position's binary digits, after the leading one, spell out the
//! path from the root: `0` goes left, `1` goes right. That is how the next free slot and the last
//! node are found without storing any index.
//!
//! # Examples
//!
//! ```
//! use bintree::heap::{array_to_heap, heap_to_sorted_array};
//!
//! let mut heap = array_to_heap(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
//! assert_eq!(heap.peek(), Some(9));
//!
//! // Sorting drains the heap.
//! assert_eq!(heap_to_sorted_array(&mut heap).unwrap(), [9, 6, 5, 4, 3, 2, 1, 1]);
//! assert!(heap.is_empty());
//! ```

use crate::error::{Error, Result};
use crate::node::{NodeId, Side};
use crate::tree::Tree;

/// A complete binary tree where no node holds a smaller key than either of its children.
/// Duplicate keys are allowed.
#[derive(Clone, Debug, Default)]
pub struct MaxHeap {
    tree: Tree,
}

impl MaxHeap {
    /// Generate a new, empty `MaxHeap`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The root node, which holds the largest key.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    /// The underlying tree, for structural queries and traversals.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Gives up the heap guarantees and returns the plain tree.
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// The number of nodes. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.tree.size(self.tree.root())
    }

    /// Whether there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The largest key, without removing it.
    pub fn peek(&self) -> Option<i32> {
        self.tree.root().and_then(|root| self.tree.key(root))
    }

    /// Inserts `key` and returns the node it ended up in after sifting up. Keys move between
    /// nodes while sifting, so the returned node is where `key` is now, not where it was first
    /// attached.
    pub fn insert(&mut self, key: i32) -> Result<NodeId> {
        let id = self.tree.heap_insert(key)?;
        self.check_invariants();
        Ok(id)
    }

    /// Removes and returns the largest key.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if there is nothing to extract.
    pub fn extract_max(&mut self) -> Result<i32> {
        let max = self.tree.heap_extract()?;
        self.check_invariants();
        Ok(max)
    }

    /// Extracts every key, largest first. This empties the heap.
    pub fn to_sorted_vec(&mut self) -> Result<Vec<i32>> {
        let mut sorted = Vec::new();
        sorted.try_reserve_exact(self.len())?;
        while !self.is_empty() {
            sorted.push(self.extract_max()?);
        }
        Ok(sorted)
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) && !self.tree.is_empty() {
            assert!(matches!(self.tree.is_heap(self.tree.root()), Ok(true)));
        }
    }
}

/// Builds a heap by inserting `keys` one at a time.
pub fn array_to_heap(keys: &[i32]) -> Result<MaxHeap> {
    let mut heap = MaxHeap {
        tree: Tree::with_capacity(keys.len())?,
    };
    for &key in keys {
        heap.insert(key)?;
    }
    log::debug!("built heap from {} keys", keys.len());
    Ok(heap)
}

/// Drains `heap` into a vector sorted in descending order. The heap is empty afterwards.
pub fn heap_to_sorted_array(heap: &mut MaxHeap) -> Result<Vec<i32>> {
    heap.to_sorted_vec()
}

impl Tree {
    /// The node at 1-based level-order `position` of a complete tree rooted at the primary root.
    pub(crate) fn node_at(&self, position: usize) -> Option<NodeId> {
        if position == 0 {
            return None;
        }
        let mut cursor = self.root()?;
        // Skip the leading one, it stands for the root itself.
        let steps = usize::BITS - 1 - position.leading_zeros();
        for shift in (0..steps).rev() {
            let node = self.node(cursor);
            cursor = if (position >> shift) & 1 == 0 {
                node.left
            } else {
                node.right
            }?;
        }
        Some(cursor)
    }

    pub(crate) fn heap_insert(&mut self, key: i32) -> Result<NodeId> {
        let Some(root) = self.root() else {
            return self.new_node(key);
        };

        let position = self.size(root) + 1;
        let parent = self
            .node_at(position / 2)
            .expect("complete tree has a node at every position up to its size");
        let side = if position % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        };

        let id = self.alloc(Some(parent), key)?;
        *self.node_mut(parent).child_mut(side) = Some(id);
        Ok(self.sift_up(id))
    }

    pub(crate) fn heap_extract(&mut self) -> Result<i32> {
        let root = self.root().ok_or(Error::EmptyTree)?;
        let max = self.node(root).key;

        let size = self.size(root);
        if size == 1 {
            self.free_node(root);
            return Ok(max);
        }

        let last = self
            .node_at(size)
            .expect("complete tree has a node at every position up to its size");
        let last_key = self.node(last).key;
        let parent = self.node(last).parent;
        self.replace_child(parent, last, None);
        self.free_node(last);

        self.node_mut(root).key = last_key;
        self.sift_down(root);
        Ok(max)
    }

    /// Swaps `id`'s key with its parent's while it is larger. Returns the node the key ends in.
    fn sift_up(&mut self, mut id: NodeId) -> NodeId {
        while let Some(parent) = self.node(id).parent {
            let (key, parent_key) = (self.node(id).key, self.node(parent).key);
            if key <= parent_key {
                break;
            }
            log::trace!("sift up: {} above {}", key, parent_key);
            self.node_mut(parent).key = key;
            self.node_mut(id).key = parent_key;
            id = parent;
        }
        id
    }

    /// Swaps `id`'s key with its larger child's while that child is larger.
    fn sift_down(&mut self, mut id: NodeId) {
        loop {
            let node = self.node(id);
            let larger = match (node.left, node.right) {
                (Some(left), Some(right)) if self.node(right).key > self.node(left).key => right,
                (Some(left), _) => left,
                (None, Some(right)) => right,
                (None, None) => break,
            };
            let (key, child_key) = (node.key, self.node(larger).key);
            if child_key <= key {
                break;
            }
            log::trace!("sift down: {} below {}", key, child_key);
            self.node_mut(id).key = child_key;
            self.node_mut(larger).key = key;
            id = larger;
        }
    }
}
