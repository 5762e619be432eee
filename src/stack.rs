//! A singly linked LIFO stack. Each push puts a new [`Node`] in front of the current head, linked
//! through its `left` slot.
//!
//! # Examples
//!
//! ```
//! use dsviz::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push("first");
//! stack.push("second");
//!
//! // Most recently pushed comes out first.
//! assert_eq!(stack.iter().copied().collect::<Vec<_>>(), ["second", "first"]);
//!
//! // Iterating doesn't consume anything, so we can walk it again.
//! assert_eq!(stack.iter().count(), 2);
//!
//! assert_eq!(stack.pop(), Some("second"));
//! assert_eq!(stack.pop(), Some("first"));
//! assert_eq!(stack.pop(), None);
//! ```

use std::fmt;

use crate::node::{Link, Node};

/// A linked stack. `len` always equals the number of nodes reachable from `head`.
pub struct Stack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.left.take();
        }
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Stack<T> {
    /// Generate a new, empty `Stack`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        let mut node = Node::new_boxed(value);
        node.left = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the most recently pushed value. Popping an empty stack is not an error, it just
    /// returns `None`.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, left, .. } = *node;
            self.head = left;
            self.len -= 1;
            value
        })
    }

    /// The most recently pushed value, if any.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// How many values are on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walks the stack from top to bottom, i.e. most recently pushed first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Stack`], top first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.left.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_is_reverse_of_pushes() {
        let stack: Stack<_> = (1..=5).collect();

        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
        assert_eq!(stack.len(), 5);
        assert_eq!(stack.iter().len(), 5);
    }

    #[test]
    fn pop_empty_is_noop() {
        let mut stack: Stack<String> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');
        assert_eq!(stack.pop(), Some('b'));
        stack.push('c');
        assert_eq!(stack.peek(), Some(&'c'));
        assert_eq!(stack.len(), 2);
        assert_eq!(format!("{stack:?}"), "['c', 'a']");
    }

    #[test]
    fn drop_long_stack() {
        let stack: Stack<_> = (0..500_000).collect();
        assert_eq!(stack.len(), 500_000);
        drop(stack);
    }
}
