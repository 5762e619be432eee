//! This crate backs a set of classroom visualizers for basic data structures, plus the small
//! lecture feed they sit next to. It is mostly for educational purposes.
//!
//! ## The structures
//!
//! Everything but the queue is built from one kind of `Node` with a value and two owning links,
//! `left` and `right`:
//!
//! - [`stack::Stack`] chains nodes through `left`. Pushing puts a node in front of the head, so
//!   walking from the head gives the values most-recent first (LIFO).
//! - [`queue::Queue`] chains its own raw-linked nodes and remembers its tail, so values come
//!   back out in the order they went in (FIFO).
//! - [`bst::Tree`] is a Binary Search Tree. For every node, the keys in its left subtree are
//!   smaller than its own key and the keys in its right subtree are greater or equal. That lets
//!   searches, inserts and deletes run in `O(height)`. It never rebalances, so the height can be
//!   as bad as the number of nodes.
//! - [`complete::Tree`] ignores its values' order completely and fills slots row by row, left
//!   to right.
//! - [`manual::Tree`] lets the caller decide where every node goes.
//!
//! > None of these are persisted. They live exactly as long as the [`session::Session`] (or
//! > whatever else) that owns them.
//!
//! ## Around the structures
//!
//! - [`render`] draws any of them as SVG, from a read-only [`Slot`] snapshot for the trees.
//! - [`feed`] lists and searches posts held by a [`feed::PostStore`].
//! - [`session`] guards one of each structure with a mutex and validates client input.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod complete;
pub mod config;
pub mod error;
pub mod feed;
pub mod manual;
mod node;
pub mod queue;
pub mod render;
pub mod session;
pub mod stack;

pub use config::Config;
pub use error::{Error, Result};
pub use node::Slot;
