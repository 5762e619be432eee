//! A singly linked FIFO queue. Nodes are chained through their `right` slot, from `head` (oldest)
//! to `tail` (newest). The links are raw pointers to leaked boxes, so the tail can be cached for
//! `O(1)` enqueueing without any node having two owners.
//!
//! # Examples
//!
//! ```
//! use dsviz::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! queue.enqueue(3);
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.dequeue(), Some(3));
//!
//! // Dequeueing from an empty queue isn't an error.
//! assert_eq!(queue.dequeue(), None);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A queue node. Unlike the trees, the queue's links are raw so that the tail can be reached
/// without going through the head.
struct Node<T> {
    value: T,
    next: Link<T>,
}

struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    fn node(&self) -> Option<&Node<T>> {
        // SAFETY: A `Some` link always points at a node leaked by `Queue::enqueue` and not yet
        // reclaimed by `Queue::dequeue`. Shared access only happens through `&Queue` (or an
        // `Iter` borrowing one) so nothing can be mutating the node.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }
}

/// A linked queue with a cached tail.
pub struct Queue<T> {
    head: Link<T>,
    // Points at the last node reachable from `head`. It is `None` exactly when `head` is `None`.
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            head: Link(None),
            tail: Link(None),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Appends `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            next: Link(None),
        })));

        match self.tail.0 {
            // SAFETY: `tail` points at a live node (see `Link::node`). Nodes are never moved or
            // reborrowed as `Box` while they're in the chain, so every copy of the pointer stays
            // valid. We hold `&mut self` so no shared reference into the chain exists.
            Some(mut tail) => unsafe { tail.as_mut().next = Link(Some(node)) },
            None => self.head = Link(Some(node)),
        }
        self.tail = Link(Some(node));
        self.len += 1;
    }

    /// Removes and returns the oldest value. Returns `None`, rather than failing, when the queue
    /// is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.head.0.map(|head| {
            // SAFETY: `head` came from `Box::leak` in `enqueue` and is reclaimed exactly once,
            // here, after which no link points at it: `head` moves on and `tail` is cleared if it
            // was the same node.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.0.is_none() {
                self.tail = Link(None);
            }
            self.len -= 1;
            node.value
        })
    }

    /// The oldest value, if any.
    pub fn peek(&self) -> Option<&T> {
        self.head.node().map(|node| &node.value)
    }

    /// How many values are waiting.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.0.is_none()
    }

    /// Walks the queue from front (next to be dequeued) to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _queue: PhantomData,
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Queue`], front first.
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _queue: PhantomData<&'a Queue<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: See `Link::node`. The `'a` borrow of the queue keeps every node alive and
        // unmodified for as long as the iterator's references.
        let node = unsafe { self.next.0?.as_ref() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// SAFETY: The queue uniquely owns every node its links point at, and only mutates them through
// `&mut self`. Sending or sharing the queue is as safe as sending or sharing the owned `T`s.
unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn refill_after_draining() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        assert_eq!(queue.dequeue(), Some("a"));
        assert!(queue.is_empty());

        // The tail was cleared, so this must become the new head rather than hang off a freed
        // node.
        queue.enqueue("b");
        queue.enqueue("c");
        assert_eq!(queue.peek(), Some(&"b"));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), ["b", "c"]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn enqueue_after_partial_drain() {
        // Head and tail end up on the same node, which the next enqueue links from. Run under
        // Miri to check the tail is still a valid pointer at that point.
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));

        queue.enqueue(3);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);

        queue.enqueue(4);
        assert_eq!(queue.peek(), Some(&4));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn drops_values_left_in_queue() {
        use std::rc::Rc;

        let value = Rc::new(());
        let mut queue = Queue::new();
        for _ in 0..3 {
            queue.enqueue(Rc::clone(&value));
        }
        queue.dequeue();
        assert_eq!(Rc::strong_count(&value), 3);

        drop(queue);
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn dequeue_empty_keeps_len_at_zero() {
        let mut queue: Queue<u8> = Queue::new();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.len(), 0);
        assert_eq!(format!("{queue:?}"), "[]");
    }

    #[test]
    fn drop_long_queue() {
        let queue: Queue<_> = (0..500_000).collect();
        assert_eq!(queue.len(), 500_000);
        drop(queue);
    }
}
