/*!
# Utilities

Provides abstractions over [`Set`] so that algorithms (most importantly traversals) can be
parameterized by the data structure used as visitation marker, plus the [`FromCapacity`]
helper to create such structures sized to the graph at call time.
*/

use std::{collections::HashSet, hash::RandomState};

use fxhash::{FxBuildHasher, FxHashSet};

use crate::node::*;

pub mod set;

pub use set::{NodeMarker, Set};

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeMarker {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // A dense marker requires one entry per possible node
        Self::new(total as NumNodes)
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}
