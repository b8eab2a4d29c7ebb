use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in insertion order.
    ///
    /// The range does not borrow `self` and hence may be used where additional
    /// mutable references of self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of undirected edges of the graph.
    /// Parallel edges are counted individually, a self-loop counts once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns the half-edges leaving `u` in construction order.
    /// ** Panics if `u >= n` **
    fn half_edges_of(&self, u: Node) -> &[HalfEdge];

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// A neighbor connected by parallel edges is returned once per edge.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.half_edges_of(u).iter().map(|h| h.target)
    }

    /// Returns the number of half-edges at `u` (a self-loop contributes two)
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.half_edges_of(u).len() as NumNodes
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns *true* if `u` has no incident edges
    fn is_isolated(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator over the weighted edges incident to `u` that are reported by `u`,
    /// i.e. edges `(u, v)` with `u < v` and every second half-edge of a self-loop at `u`.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = (Edge, Weight)> + '_ {
        let mut loop_half_edges = 0usize;
        self.half_edges_of(u).iter().filter_map(move |h| {
            if h.target == u {
                loop_half_edges += 1;
                (loop_half_edges % 2 == 0).then_some((Edge(u, u), h.weight))
            } else {
                (u < h.target).then_some((Edge(u, h.target), h.weight))
            }
        })
    }

    /// Returns an iterator over all undirected edges, each reported exactly once and normalized.
    fn edges(&self) -> impl Iterator<Item = (Edge, Weight)> + '_ {
        self.vertices().flat_map(|u| self.edges_of(u))
    }

    /// Returns all undirected edges in sorted order
    fn ordered_edges(&self) -> Vec<(Edge, Weight)> {
        self.edges().sorted().collect_vec()
    }
}

/// Name-based access to the vertices of a labelled graph
pub trait NamedVertices: GraphNodeOrder {
    /// Returns the name of `u`
    /// ** Panics if `u >= n` **
    fn name_of(&self, u: Node) -> &str;

    /// Returns the node with the given name, compared by exact string equality
    fn find_vertex(&self, name: &str) -> Option<Node>;

    /// Returns an iterator over all vertex names in insertion order
    fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices().map(|u| self.name_of(u))
    }
}

/// Provides methods to insert vertices and undirected edges
pub trait GraphEdgeEditing: NamedVertices {
    /// Returns the node with the given name, inserting a new isolated vertex if none exists
    fn add_vertex(&mut self, name: &str) -> Node;

    /// Adds the undirected edge `{u, v}` of weight `w`, i.e. the half-edges `u -> v` and `v -> u`.
    /// Parallel edges and self-loops are stored as given.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight);

    /// Resolves (and if necessary creates) both endpoints by name and connects them.
    /// Returns the normalized edge that was inserted.
    fn add_edge_by_names(&mut self, u: &str, v: &str, weight: Weight) -> Edge {
        let u = self.add_vertex(u);
        let v = self.add_vertex(v);
        self.add_edge(u, v, weight);
        Edge(u, v).normalized()
    }
}
