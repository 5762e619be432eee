//! A binary tree built by hand: the caller says which side, and optionally which parent, each
//! new value hangs off. Parents are named by the `id` a [`Slot`] carries in the most recent
//! [`Tree::snapshot`].
//!
//! # Examples
//!
//! ```
//! use dsviz::manual::{Attach, Side, Tree};
//!
//! let mut tree = Tree::new();
//! // The first value is always the root, whichever side was asked for.
//! assert_eq!(tree.attach(Side::Right, None, "root"), Attach::Root);
//! assert_eq!(tree.attach(Side::Left, None, "l"), Attach::Attached);
//!
//! // The root's left slot is taken, so naming the root as parent does nothing.
//! assert_eq!(tree.attach(Side::Left, Some(0), "again"), Attach::Ignored);
//! assert_eq!(tree.len(), 2);
//! ```

use std::fmt;

use crate::node::{self, Link, Node, Slot};

/// Which child slot to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

/// What an [`attach`][Tree::attach] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    /// The tree was empty so the value became the root.
    Root,
    /// The value was added as a child.
    Attached,
    /// The parent didn't exist or its slot was taken. The tree is unchanged.
    Ignored,
}

/// A binary tree whose shape is chosen by the caller.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::drop_tree(&mut self.root);
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.snapshot()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels. An empty tree has height 0.
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref())
    }

    /// Empties the tree.
    pub fn reset(&mut self) {
        node::drop_tree(&mut self.root);
        self.len = 0;
    }

    /// Adds `value` on the given `side`.
    ///
    /// - An empty tree takes the value as its root.
    /// - With a `parent`, the value fills that node's slot if the slot is empty.
    /// - Without one, the value fills the root's slot if it's empty, otherwise it goes to the end
    ///   of the chain of `side` children running down from the root.
    pub fn attach(&mut self, side: Side, parent: Option<usize>, value: T) -> Attach {
        if self.root.is_none() {
            self.root = Some(Node::new_boxed(value));
            self.len = 1;
            return Attach::Root;
        }

        let slot = match parent {
            Some(id) => match node::level_order_nth(&mut self.root, id) {
                Some(parent) => child(parent, side),
                None => return Attach::Ignored,
            },
            None => {
                let mut cur = &mut self.root;
                while let Some(n) = cur {
                    cur = child(n, side);
                }
                cur
            }
        };

        if slot.is_some() {
            return Attach::Ignored;
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        Attach::Attached
    }

    /// A level-order listing of the tree's nodes that a renderer can lay out.
    pub fn snapshot(&self) -> Vec<Slot<'_, T>> {
        node::level_order_slots(self.root.as_deref())
    }
}

fn child<T>(node: &mut Node<T>, side: Side) -> &mut Link<T> {
    match side {
        Side::Left => &mut node.left,
        Side::Right => &mut node.right,
    }
}
