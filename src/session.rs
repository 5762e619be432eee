//! Per-session state for the interactive visualizers.
//!
//! A [`Session`] owns one of each structure behind its own [`Mutex`], so handlers can share a
//! session across threads and operations on different structures never wait on each other.
//! Every operation takes the raw value the client sent, validates it before taking any lock,
//! and answers with either freshly rendered SVG or a small result.
//!
//! ```
//! use dsviz::session::Session;
//!
//! let session = Session::default();
//! session.bst_insert("5").unwrap();
//! session.bst_insert("3").unwrap();
//!
//! assert_eq!(session.bst_search("3").unwrap(), true);
//! assert_eq!(session.bst_max(), Some(5));
//! assert_eq!(session.bst_height(), 2);
//!
//! // Bad input is reported, and the tree is left alone.
//! assert!(session.bst_insert("abc").is_err());
//! assert_eq!(session.bst_height(), 2);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::bst;
use crate::complete;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::manual::{self, Attach, Side};
use crate::queue::Queue;
use crate::render::{Renderer, Spread};
use crate::stack::Stack;

/// The structures behind one set of visualizers.
#[derive(Default)]
pub struct Session {
    queue: Mutex<Queue<String>>,
    stack: Mutex<Stack<String>>,
    tree: Mutex<complete::Tree<String>>,
    binary: Mutex<manual::Tree<String>>,
    bst: Mutex<bst::Tree<i64>>,
    renderer: Renderer,
}

/// Locks a structure. A panic while a lock was held can't leave a structure half-modified,
/// because every mutation finishes before its guard is dropped, so poisoning is ignored.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Trims `raw`, rejecting it if nothing is left.
fn required(raw: &str) -> Result<&str> {
    let value = raw.trim();
    if value.is_empty() {
        warn!("rejected blank value");
        return Err(Error::Blank);
    }
    Ok(value)
}

/// Parses `raw` as an integer key for the BST.
fn integer(raw: &str) -> Result<i64> {
    let value = required(raw)?;
    value.parse().map_err(|source| {
        warn!(input = value, "rejected non-integer BST value");
        Error::NotAnInteger {
            input: value.to_string(),
            source,
        }
    })
}

impl Session {
    /// A session rendering with the given geometry.
    pub fn new(render: RenderConfig) -> Self {
        Self {
            renderer: Renderer::new(render),
            ..Self::default()
        }
    }

    /// Appends a value to the queue and renders it.
    pub fn enqueue(&self, raw: &str) -> Result<String> {
        let value = required(raw)?;
        let mut queue = lock(&self.queue);
        queue.enqueue(value.to_string());
        debug!(value, len = queue.len(), "enqueued");
        Ok(self.renderer.queue(&queue))
    }

    /// Drops the front of the queue, if there is one, and renders what's left.
    pub fn dequeue(&self) -> String {
        let mut queue = lock(&self.queue);
        let removed = queue.dequeue();
        debug!(?removed, len = queue.len(), "dequeued");
        self.renderer.queue(&queue)
    }

    /// Pushes a value and renders the stack.
    pub fn push(&self, raw: &str) -> Result<String> {
        let value = required(raw)?;
        let mut stack = lock(&self.stack);
        stack.push(value.to_string());
        debug!(value, len = stack.len(), "pushed");
        Ok(self.renderer.stack(&stack))
    }

    /// Pops the top value, if there is one, and renders what's left.
    pub fn pop(&self) -> String {
        let mut stack = lock(&self.stack);
        let removed = stack.pop();
        debug!(?removed, len = stack.len(), "popped");
        self.renderer.stack(&stack)
    }

    /// Adds a value to the level-filled tree and renders it.
    pub fn tree_insert(&self, raw: &str) -> Result<String> {
        let value = required(raw)?;
        let mut tree = lock(&self.tree);
        tree.insert(value.to_string());
        debug!(value, len = tree.len(), "inserted into tree");
        Ok(self.renderer.tree(&tree.snapshot(), Spread::ByLevel))
    }

    /// Empties the level-filled tree.
    pub fn tree_reset(&self) -> String {
        let mut tree = lock(&self.tree);
        tree.clear();
        self.renderer.tree(&tree.snapshot(), Spread::ByLevel)
    }

    /// Attaches a value to the hand-built binary tree and renders it. `parent` is a node id from
    /// the rendered snapshot. An attach that can't happen leaves the tree as it was.
    pub fn binary_attach(&self, side: Side, parent: Option<usize>, raw: &str) -> Result<String> {
        let value = required(raw)?;
        let mut tree = lock(&self.binary);
        match tree.attach(side, parent, value.to_string()) {
            Attach::Ignored => debug!(value, ?side, ?parent, "binary tree slot unavailable"),
            outcome => debug!(value, ?side, ?parent, ?outcome, "attached to binary tree"),
        }
        Ok(self.renderer.tree(&tree.snapshot(), Spread::Halving))
    }

    /// Empties the hand-built binary tree.
    pub fn binary_reset(&self) -> String {
        let mut tree = lock(&self.binary);
        tree.reset();
        self.renderer.tree(&tree.snapshot(), Spread::Halving)
    }

    /// Inserts an integer key into the BST and renders it.
    pub fn bst_insert(&self, raw: &str) -> Result<String> {
        let key = integer(raw)?;
        let mut bst = lock(&self.bst);
        bst.insert(key);
        debug!(key, len = bst.len(), "inserted into BST");
        Ok(self.renderer.tree(&bst.snapshot(), Spread::ByLevel))
    }

    /// Whether the BST holds the given integer key.
    pub fn bst_search(&self, raw: &str) -> Result<bool> {
        let key = integer(raw)?;
        Ok(lock(&self.bst).contains(&key))
    }

    /// Deletes one node with the given key, if any, and renders the BST.
    pub fn bst_delete(&self, raw: &str) -> Result<String> {
        let key = integer(raw)?;
        let mut bst = lock(&self.bst);
        let removed = bst.delete(&key);
        debug!(key, found = removed.is_some(), len = bst.len(), "deleted from BST");
        Ok(self.renderer.tree(&bst.snapshot(), Spread::ByLevel))
    }

    /// The BST's largest key, or `None` when it's empty.
    pub fn bst_max(&self) -> Option<i64> {
        lock(&self.bst).max().copied()
    }

    /// The BST's height. 0 when it's empty.
    pub fn bst_height(&self) -> usize {
        lock(&self.bst).height()
    }

    /// Empties the BST.
    pub fn bst_reset(&self) -> String {
        let mut bst = lock(&self.bst);
        bst.clear();
        self.renderer.tree(&bst.snapshot(), Spread::ByLevel)
    }
}
