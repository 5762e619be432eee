//! An unbalanced Binary Search Tree over bare keys.
//!
//! Every key in a node's left subtree compares less than the node's key and every key in its
//! right subtree compares greater than *or equal to* it. Equal keys are never merged: inserting a
//! key that is already present adds another node to the right, so the tree behaves like a sorted
//! multiset.
//!
//! Nothing here rebalances, so sorted input produces a tree as tall as it is long. Every walk is
//! iterative to keep those trees from overflowing the call stack.
//!
//! # Examples
//!
//! ```
//! use dsviz::bst::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.height(), 0);
//!
//! for key in [5, 3, 8, 1] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&3));
//! assert_eq!(tree.max(), Some(&8));
//! assert_eq!(tree.height(), 3);
//!
//! // Deleting returns the key that was removed, and does nothing for absent keys.
//! assert_eq!(tree.delete(&3), Some(3));
//! assert_eq!(tree.delete(&42), None);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 5, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::node::{self, Link, Node, Slot};

/// A Binary Search Tree with ties going right.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        node::drop_tree(&mut self.root);
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let mut root = None;
        let mut pending = Vec::new();
        if let Some(src) = self.root.as_deref() {
            pending.push((src, &mut root));
        }

        // Copy node by node so the clone has exactly the same shape, including any equal keys
        // that ended up on the left after a deletion.
        while let Some((src, dst)) = pending.pop() {
            let copy = dst.insert(Node::new_boxed(src.value.clone()));
            let Node { left, right, .. } = &mut **copy;
            if let Some(src_left) = src.left.as_deref() {
                pending.push((src_left, left));
            }
            if let Some(src_right) = src.right.as_deref() {
                pending.push((src_right, right));
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of nodes, counting duplicates separately.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        node::drop_tree(&mut self.root);
        self.len = 0;
    }

    /// Inserts `key`. This walks down from the root, going left when `key` is smaller than the
    /// node's key and right otherwise, and hangs a new leaf off the first empty slot it reaches.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsviz::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// // Duplicates are kept as separate nodes.
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = if key < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *cur = Some(Node::new_boxed(key));
        self.len += 1;
    }

    /// Whether a node with the given key is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// The largest key, found by following right children to the end. `None` for an empty tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// The smallest key. `None` for an empty tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The number of nodes on the longest root-to-leaf path. An empty tree has height 0 and a
    /// lone root has height 1.
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref())
    }

    /// Deletes the first node found with the given key and returns its key. If the tree does not
    /// contain the key, nothing happens.
    ///
    /// A node with two children takes over its in-order predecessor's key (the largest key in its
    /// left subtree), and the predecessor's node is removed from the left subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsviz::bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.delete(&3), Some(3));
    ///
    /// // 3's left subtree is just 1, so 1 moves up into 3's place and keeps 4 as its right child.
    /// let shape: Vec<_> = tree.snapshot().iter().map(|slot| *slot.value).collect();
    /// assert_eq!(shape, [5, 1, 8, 4, 7, 9]);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let mut cur = &mut self.root;
        loop {
            match key.cmp(&cur.as_deref()?.value) {
                Ordering::Less => cur = &mut cur.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => cur = &mut cur.as_mut()?.right,
            }
        }

        let mut node = cur.take()?;
        let removed = match (node.left.take(), node.right.take()) {
            (None, None) => node.value,
            (Some(child), None) | (None, Some(child)) => {
                *cur = Some(child);
                node.value
            }
            (Some(left), Some(right)) => {
                let mut left = Some(left);
                let predecessor = pop_max(&mut left)?;
                node.left = left;
                node.right = Some(right);
                let removed = std::mem::replace(&mut node.value, predecessor);
                *cur = Some(node);
                removed
            }
        };

        self.len -= 1;
        Some(removed)
    }

    /// Iterates over the keys in ascending order. Equal keys come out in the order they were
    /// inserted.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            pending: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Iterates over the keys depth first: a node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder {
            pending: self.root.as_deref().into_iter().collect(),
        }
    }

    /// A level-order listing of the tree's nodes that a renderer can lay out.
    pub fn snapshot(&self) -> Vec<Slot<'_, K>> {
        node::level_order_slots(self.root.as_deref())
    }
}

impl<K> Tree<K>
where
    K: AsRef<str>,
{
    /// Finds every key containing `query`, ignoring case. Keys come out in depth-first order
    /// (node, left, right), not sorted order. An empty query matches nothing and doesn't walk
    /// the tree at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsviz::bst::Tree;
    ///
    /// let tree: Tree<_> = ["Intro to Stacks", "Queue Basics", "Binary Trees"]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(tree.matching("tree").collect::<Vec<_>>(), [&"Binary Trees"]);
    /// assert_eq!(tree.matching("").count(), 0);
    /// ```
    pub fn matching(&self, query: &str) -> Matches<'_, K> {
        let pending = if query.is_empty() {
            Vec::new()
        } else {
            self.root.as_deref().into_iter().collect()
        };

        Matches {
            walk: Preorder { pending },
            query: query.to_lowercase(),
        }
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Removes the rightmost node under `link` and returns its key, splicing that node's left child
/// into its place.
fn pop_max<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_ref()?.right.is_some() {
        link = &mut link.as_mut()?.right;
    }

    let node = link.take()?;
    let Node { value, left, .. } = *node;
    *link = left;
    Some(value)
}

/// In-order iterator over a [`Tree`].
pub struct Iter<'a, K> {
    pending: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

/// Depth-first (node, left, right) iterator over a [`Tree`].
pub struct Preorder<'a, K> {
    pending: Vec<&'a Node<K>>,
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        // Right goes on first so the left subtree is finished before we get to it.
        self.pending.extend(node.right.as_deref());
        self.pending.extend(node.left.as_deref());
        Some(&node.value)
    }
}

/// Iterator returned by [`Tree::matching`].
pub struct Matches<'a, K> {
    walk: Preorder<'a, K>,
    query: String,
}

impl<'a, K> Iterator for Matches<'a, K>
where
    K: AsRef<str>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let query = &self.query;
        self.walk.by_ref().find(|key| {
            let text: &str = (*key).as_ref();
            text.to_lowercase().contains(query.as_str())
        })
    }
}
