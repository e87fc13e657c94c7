//! This crate exposes binary trees with three ordering disciplines, all built from one kind of
//! node.
//!
//! ## Nodes
//!
//! A [`Node`] stores an `i32` key and links to its parent, left child, and right child. Nodes
//! live in a [`Tree`]'s arena and are referred to by [`NodeId`]. The child links own their
//! subtrees; the parent link is only a back-reference used to walk upwards (depths, ancestors,
//! siblings, rebalancing). Every mutation keeps the two directions in agreement: if `p` has child
//! `c`, then `c`'s parent is `p`.
//!
//! ## Ordering disciplines
//!
//! * [`bst::Bst`] keeps the Binary Search Tree invariants:
//!
//!   1. For every node, all the nodes in its left subtree have a smaller key.
//!   2. For every node, all the nodes in its right subtree have a larger key.
//!
//!   Keys are unique; inserting a key twice is rejected rather than overwriting.
//! * [`avl::Avl`] is a search tree that also keeps the heights of every node's two subtrees
//!   within one of each other, by rotating after inserts and removals. Searching therefore takes
//!   `O(lg N)`.
//! * [`heap::MaxHeap`] keeps every key at least as large as its children's keys and the shape
//!   complete (every level full except the last, which fills left to right). It finds its next
//!   and last positions by walking the bits of the node count instead of using an array.
//!
//! Plain [`Tree`]s can be built by hand with [`Tree::new_node`], [`Tree::insert_left`] and
//! [`Tree::insert_right`], and every tree can be inspected with the structural queries (height,
//! size, completeness, lowest common ancestor, ...) and traversals defined on [`Tree`].
//!
//! ## Errors
//!
//! Operations that can fail return [`Result`]. Failures never leave a tree half modified; in
//! particular running out of memory surfaces as [`Error::AllocationFailure`] instead of aborting.
//!
//! ## Logging
//!
//! Rotations, rebalancing, sifting and node frees are reported through the [`log`] facade at
//! `trace` level; rejected operations and bulk builds at `debug`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod error;
pub mod heap;
mod node;
mod query;
mod rotate;
mod tree;


pub use avl::{array_to_avl, sorted_array_to_avl, Avl};
pub use bst::{array_to_bst, Bst};
pub use error::{Error, Result};
pub use heap::{array_to_heap, heap_to_sorted_array, MaxHeap};
pub use node::{Node, NodeId, Side};
pub use tree::Tree;
