#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

mod bst;
mod complete;
mod linear;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Remove one K from the data structure
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// Things to do to a stack or queue.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Linear<V> {
    /// Push or enqueue the value
    Add(V),
    /// Pop or dequeue
    Take,
}

impl<V> Arbitrary for Linear<V>
where
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Linear::Add(V::arbitrary(g))
        } else {
            Linear::Take
        }
    }
}
