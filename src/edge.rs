use std::fmt::{Debug, Display};

use crate::node::*;

/// An edge is defined by two nodes/endpoints.
/// As all graphs in this crate are undirected, `Edge(u, v)` and `Edge(v, u)` describe the same edge;
/// algorithms usually report [`Edge::normalized`] edges.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

/// One endpoint record of an undirected edge, stored in the adjacency list of its source.
///
/// An undirected edge `{u, v}` of weight `w` is realized by the half-edges `u -> v` and `v -> u`,
/// both carrying `w`. A self-loop at `u` is realized by two half-edges `u -> u`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfEdge {
    pub target: Node,
    pub weight: Weight,
}

impl HalfEdge {
    pub fn new(target: Node, weight: Weight) -> Self {
        Self { target, weight }
    }
}
