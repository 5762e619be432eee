//! The two-link `Node` the stack and the trees are built from.
//!
//! Stacks chain through `left` and the trees use both links as child slots. A `Node` is always owned by exactly one `Link`, so there
//! is never any sharing and never any cycle.

use std::collections::VecDeque;

use serde::Serialize;

/// An owning pointer to the next node (or child), if there is one.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// One entry of a tree snapshot. A renderer can lay out shapes from a list of
/// these without ever touching the tree itself.
///
/// `id` is the entry's position in the level-order listing, so `left` and
/// `right` can be used to index straight back into the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot<'a, T> {
    /// Level-order position of this node.
    pub id: usize,
    /// The value stored in the node.
    pub value: &'a T,
    /// Identity of the left child.
    pub left: Option<usize>,
    /// Identity of the right child.
    pub right: Option<usize>,
}

/// Lists a subtree breadth-first, numbering nodes in the order they are visited.
pub(crate) fn level_order_slots<'a, T>(root: Option<&'a Node<T>>) -> Vec<Slot<'a, T>> {
    let mut slots = Vec::new();
    let mut pending = VecDeque::new();
    pending.extend(root);

    // Children are numbered when they're queued. Queued order is visit order, so a node's
    // number is also its index in `slots`.
    let mut next_id = 1;
    while let Some(node) = pending.pop_front() {
        let mut number = |child: Option<&'a Node<T>>| {
            child.map(|c| {
                pending.push_back(c);
                next_id += 1;
                next_id - 1
            })
        };
        let left = number(node.left.as_deref());
        let right = number(node.right.as_deref());
        slots.push(Slot {
            id: slots.len(),
            value: &node.value,
            left,
            right,
        });
    }

    slots
}

/// Looks up the node a snapshot calls `id`, walking in the same order
/// [`level_order_slots`] numbers them.
pub(crate) fn level_order_nth<T>(root: &mut Link<T>, id: usize) -> Option<&mut Node<T>> {
    let mut pending = VecDeque::new();
    pending.extend(root.as_deref_mut());

    let mut seen = 0;
    while let Some(node) = pending.pop_front() {
        if seen == id {
            return Some(node);
        }
        seen += 1;
        pending.extend(node.left.as_deref_mut());
        pending.extend(node.right.as_deref_mut());
    }

    None
}

/// Number of levels below and including `root`. An empty subtree has height 0.
pub(crate) fn height<T>(root: Option<&Node<T>>) -> usize {
    let mut levels = 0;
    let mut level: Vec<&Node<T>> = root.into_iter().collect();
    while !level.is_empty() {
        levels += 1;
        level = level
            .into_iter()
            .flat_map(|n| n.left.as_deref().into_iter().chain(n.right.as_deref()))
            .collect();
    }

    levels
}

/// Tears a tree down without recursing, so a degenerate tree with millions of nodes doesn't
/// overflow the call stack when dropped.
pub(crate) fn drop_tree<T>(root: &mut Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = root.take().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
