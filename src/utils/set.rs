/*!
# Generalized Sets

This module provides abstractions over `Set` data structures, allowing algorithms
to choose the most efficient implementation based on context.

Examples:
- Sparse sets -> `HashSet` / `FxHashSet`
- Dense node sets -> [`NodeMarker`]

Traversals are parameterized by a `Set<Node>` that serves as their visitation marker.
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use fixedbitset::FixedBitSet;

use crate::node::*;

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

/// A dense per-node marker, i.e. one bit per node of a graph.
///
/// This is the default visitation marker for traversals: the bitset is sized to the number of
/// nodes at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMarker {
    bits: FixedBitSet,
}

impl NodeMarker {
    /// Creates a marker for `n` nodes with no node marked
    pub fn new(n: NumNodes) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(n as usize),
        }
    }

    /// Marks `u` and returns `true` if it was marked before
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.bits.put(u as usize)
    }

    /// Returns `true` if `u` is marked
    pub fn get_bit(&self, u: Node) -> bool {
        self.bits.contains(u as usize)
    }

    /// Unmarks `u` and returns `true` if it was marked before
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        let prev = self.bits.contains(u as usize);
        self.bits.set(u as usize, false);
        prev
    }

    /// Returns the number of marked nodes
    pub fn cardinality(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Returns an iterator over all marked nodes in increasing order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.ones().map(|u| u as Node)
    }
}

impl Set<Node> for NodeMarker {
    fn insert(&mut self, value: Node) -> bool {
        self.set_bit(value)
    }

    fn remove(&mut self, value: &Node) -> bool {
        self.clear_bit(*value)
    }

    fn contains(&self, value: &Node) -> bool {
        self.get_bit(*value)
    }

    fn clear(&mut self) {
        self.bits.clear();
    }

    fn len(&self) -> usize {
        self.cardinality()
    }
}
