//! Single rotations. They restructure a subtree around a different root without touching keys,
//! so the in-order sequence (and therefore search order) is preserved.

use crate::error::{Error, Result};
use crate::node::{NodeId, Side};
use crate::tree::Tree;

impl Tree {
    /// Rotate `id` to the left. This moves the right child up vertically and `id` down
    /// vertically, and returns the new subtree root.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   Option<parent>             Option<parent>
    ///     /                          /
    ///   old_root (i.e. `id`)      new_root
    ///    /    \                    /    \
    ///   x   new_root  rotate ->  old_root  z
    ///        /  \                 /  \
    ///       y    z               x    y
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRotation`] if `id` has no right child; the tree is left untouched.
    pub fn rotate_left(&mut self, id: NodeId) -> Result<NodeId> {
        self.rotate(id, Side::Right)
    }

    /// Rotate `id` to the right. This moves the left child up vertically and `id` down
    /// vertically, and returns the new subtree root.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      Option<parent>            Option<parent>
    ///        /                         /
    ///     old_root (i.e. `id`)      new_root
    ///      /     \                  /     \
    ///   new_root  z     rotate ->  x    old_root
    ///    / \                               /  \
    ///   x   y                             y    z
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRotation`] if `id` has no left child; the tree is left untouched.
    pub fn rotate_right(&mut self, id: NodeId) -> Result<NodeId> {
        self.rotate(id, Side::Left)
    }

    /// Lifts the child of `old_root` on side `up` into `old_root`'s place. That child's inner
    /// subtree (the one on the opposite side) is handed over to `old_root`.
    pub(crate) fn rotate(&mut self, old_root: NodeId, up: Side) -> Result<NodeId> {
        let node = self.get(old_root).ok_or(Error::InvalidNode(old_root))?;
        let Some(new_root) = node.child(up) else {
            log::debug!("refusing to rotate {:?} without a {} child", old_root, up);
            return Err(Error::InvalidRotation {
                node: old_root,
                missing: up,
            });
        };
        let parent = node.parent;
        let down = up.opposite();

        let inner = self.node(new_root).child(down);
        *self.node_mut(old_root).child_mut(up) = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(old_root);
        }

        // Hook `new_root` into the old slot before `old_root` forgets its parent.
        self.replace_child(parent, old_root, Some(new_root));

        *self.node_mut(new_root).child_mut(down) = Some(old_root);
        self.node_mut(old_root).parent = Some(new_root);

        log::trace!(
            "rotated {:?} {}, {:?} is the new subtree root",
            old_root,
            down,
            new_root
        );
        Ok(new_root)
    }
}
