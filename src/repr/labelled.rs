use fxhash::FxHashMap;
use smallvec::SmallVec;
use tracing::warn;

use super::*;

/// Adjacency list of a single vertex. Most vertices of sparse input graphs have few neighbors,
/// so we keep up to four half-edges inline.
pub type HalfEdges = SmallVec<[HalfEdge; 4]>;

/// A half-edge whose target name did not resolve to any vertex.
/// It is kept for diagnostics only and never reached by any traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingHalfEdge {
    pub source: Node,
    pub target: String,
    pub weight: Weight,
}

/// An undirected, weighted graph with named vertices.
///
/// Vertices live in an arena and are addressed by dense [`Node`] indices in insertion order;
/// the name of a vertex is its identity and is mapped to its index by a hash map maintained
/// during construction. All analyses only take `&self`.
#[derive(Debug, Clone, Default)]
pub struct LabelledGraph {
    name: String,
    names: Vec<String>,
    index: FxHashMap<String, Node>,
    nbs: Vec<HalfEdges>,
    num_edges: NumEdges,
    dangling: Vec<DanglingHalfEdge>,
}

impl LabelledGraph {
    /// Creates a new graph with the given name and no vertices
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates a graph from a list of named, weighted edges
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("b", "c", 4)]);
    /// assert_eq!(g.number_of_nodes(), 3);
    /// assert_eq!(g.number_of_edges(), 2);
    /// assert_eq!(g.find_vertex("c"), Some(2));
    /// ```
    pub fn from_named_edges<'a, S, I>(name: S, edges: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (&'a str, &'a str, Weight)>,
    {
        let mut graph = Self::new(name);
        for (u, v, w) in edges {
            graph.add_edge_by_names(u, v, w);
        }
        graph
    }

    /// Returns the name of the graph
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds the single half-edge `u -> v`.
    ///
    /// The caller is responsible for adding the matching `v -> u`; the edge counter is not touched.
    /// Prefer [`GraphEdgeEditing::add_edge`] which maintains both.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_half_edge(&mut self, u: Node, v: Node, weight: Weight) {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].push(HalfEdge::new(v, weight));
    }

    /// Adds a half-edge from `u` to the vertex called `target`.
    ///
    /// If no vertex with that name exists, the half-edge is recorded as dangling, skipped by all
    /// algorithms, and `false` is returned.
    pub fn add_half_edge_to_name(&mut self, u: Node, target: &str, weight: Weight) -> bool {
        match self.find_vertex(target) {
            Some(v) => {
                self.add_half_edge(u, v, weight);
                true
            }
            None => {
                warn!(
                    vertex = self.name_of(u),
                    missing = target,
                    "half-edge points to unknown vertex; it will be ignored"
                );
                self.dangling.push(DanglingHalfEdge {
                    source: u,
                    target: target.to_string(),
                    weight,
                });
                false
            }
        }
    }

    /// Returns all half-edges whose target could not be resolved
    pub fn dangling_half_edges(&self) -> &[DanglingHalfEdge] {
        &self.dangling
    }

    /// Returns the weight of the lightest edge between `u` and `v`, if any
    pub fn weight_between(&self, u: Node, v: Node) -> Option<Weight> {
        self.nbs[u as usize]
            .iter()
            .filter(|h| h.target == v)
            .map(|h| h.weight)
            .min()
    }
}

impl GraphNodeOrder for LabelledGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for LabelledGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for LabelledGraph {
    fn half_edges_of(&self, u: Node) -> &[HalfEdge] {
        &self.nbs[u as usize]
    }
}

impl NamedVertices for LabelledGraph {
    fn name_of(&self, u: Node) -> &str {
        &self.names[u as usize]
    }

    fn find_vertex(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }
}

impl GraphEdgeEditing for LabelledGraph {
    fn add_vertex(&mut self, name: &str) -> Node {
        if let Some(u) = self.find_vertex(name) {
            return u;
        }

        let u = self.number_of_nodes();
        assert!(u < INVALID_NODE, "Too many vertices");
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), u);
        self.nbs.push(HalfEdges::new());
        u
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        self.add_half_edge(u, v, weight);
        self.add_half_edge(v, u, weight);
        self.num_edges += 1;
    }
}
