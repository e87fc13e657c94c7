//! The single structural primitive every tree in this crate is made of.

use std::fmt;

/// A handle to a node stored in a [`Tree`][crate::Tree]'s arena.
///
/// Ids are only meaningful for the tree that handed them out. Once a node is freed its id may be
/// reused by a later allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena slot this id points at.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// A key plus its three relationships. `left` and `right` are the owning edges; `parent` is only
/// a back-reference used to walk upwards and is kept in sync with them by every mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: i32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(parent: Option<NodeId>, key: i32) -> Self {
        Self {
            key,
            parent,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// The node this one hangs from, if it isn't a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The left child.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The right child.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The child on the given side.
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// A node with no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// A node without a parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// How many children this node has (0, 1 or 2).
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}
