//! A binary tree that fills itself level by level. Values aren't compared at all: each insert
//! takes the first free child slot in breadth-first order, so the tree always has the shape of
//! a complete binary tree.
//!
//! # Examples
//!
//! ```
//! use dsviz::complete::Tree;
//!
//! let mut tree = Tree::new();
//! for value in ["A", "B", "C", "D", "E"] {
//!     tree.insert(value);
//! }
//!
//! // Filled row by row, left to right.
//! assert_eq!(tree.level_order().copied().collect::<String>(), "ABCDE");
//! assert_eq!(tree.height(), 3);
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::node::{self, Link, Node, Slot};

/// A level-order filled binary tree.
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
        f.debug_list().entries(self.level_order()).finish()
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

    /// Removes every node.
    pub fn clear(&mut self) {
        node::drop_tree(&mut self.root);
        self.len = 0;
    }

    /// Adds `value` in the first free slot. The first value becomes the root. After that, nodes
    /// are visited breadth first and the value goes into the first node whose left slot, or
    /// failing that right slot, is empty.
    pub fn insert(&mut self, value: T) {
        let new = Node::new_boxed(value);
        self.len += 1;

        let Some(root) = self.root.as_deref_mut() else {
            self.root = Some(new);
            return;
        };

        let mut pending = VecDeque::from([root]);
        while let Some(node) = pending.pop_front() {
            match (&mut node.left, &mut node.right) {
                (slot @ None, _) | (Some(_), slot @ None) => {
                    *slot = Some(new);
                    return;
                }
                (Some(left), Some(right)) => {
                    pending.push_back(&mut **left);
                    pending.push_back(&mut **right);
                }
            }
        }
    }

    /// Iterates over the values row by row, left to right.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            pending: self.root.as_deref().into_iter().collect(),
        }
    }

    /// A level-order listing of the tree's nodes that a renderer can lay out.
    pub fn snapshot(&self) -> Vec<Slot<'_, T>> {
        node::level_order_slots(self.root.as_deref())
    }
}

impl<T> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Breadth-first iterator over a [`Tree`].
pub struct LevelOrder<'a, T> {
    pending: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop_front()?;
        self.pending.extend(node.left.as_deref());
        self.pending.extend(node.right.as_deref());
        Some(&node.value)
    }
}
