use std::collections::TryReserveError;

use thiserror::Error;

use crate::node::{NodeId, Side};

/// A `Result` type returned by every fallible tree operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or mutating a tree. None of these leave the
/// tree in a partially modified state.
#[derive(Debug, Error)]
pub enum Error {
    /// The arena couldn't grow to hold another node.
    #[error("failed to allocate a node: {0}")]
    AllocationFailure(#[from] TryReserveError),
    /// An ordered insert found the key already present.
    #[error("key {0} is already in the tree")]
    DuplicateKey(i32),
    /// A search-driven removal didn't find the key.
    #[error("key {0} is not in the tree")]
    KeyNotFound(i32),
    /// A rotation was requested on a node without the child that would move up.
    #[error("cannot rotate {node:?}: it has no {missing} child")]
    InvalidRotation {
        /// The node that was asked to rotate.
        node: NodeId,
        /// The side the required child was missing from.
        missing: Side,
    },
    /// A builder that requires strictly ascending keys got something else at `index`.
    #[error("keys are not strictly ascending at index {index}")]
    NotSorted {
        /// Position of the first key that isn't larger than its predecessor.
        index: usize,
    },
    /// The operation needs at least one node.
    #[error("the tree is empty")]
    EmptyTree,
    /// The id doesn't refer to a live node of this tree.
    #[error("{0:?} does not refer to a live node")]
    InvalidNode(NodeId),
}
